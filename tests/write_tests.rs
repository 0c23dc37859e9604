//! Integration tests for writing FBX ASCII documents to disk.

use fbx_ascii::ascii::{
    Connection, Endpoint, ExportOptions, FbxScene, KeyTiming, SceneDescription, Value, WriteSink,
};
use fbx_ascii::prelude::*;

use tempfile::NamedTempFile;

fn animated_quad_scene(options: ExportOptions) -> FbxScene {
    let mut scene = FbxScene::new(options);
    let model = scene
        .add_mesh(&MeshData::quad("card"), Mat4::IDENTITY)
        .expect("Failed to add mesh");

    let mut anim = AnimObject::new();
    anim.add_frame(Vec3::ZERO, Quat::IDENTITY, 0.0);
    anim.add_frame(Vec3::ONE, Quat::IDENTITY, 1.0);
    scene.animate(model, &anim).expect("Failed to animate");
    scene.connect_to_scene(model).expect("Failed to connect");
    scene
}

#[test]
fn test_write_file_matches_in_memory() {
    let temp = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp.path();

    let scene = animated_quad_scene(ExportOptions::default());
    scene.write_file(path).expect("Failed to write file");

    let on_disk = std::fs::read_to_string(path).expect("Failed to read back");
    assert_eq!(on_disk, scene.to_document().to_string());
    assert!(on_disk.contains("\tModel: \"Model::card\", \"Mesh\"\n"));
    assert!(on_disk.contains("PolygonVertexIndex: 3, 2, 1, -1\n"));
}

#[test]
fn test_root_blocks_in_order() {
    let text = animated_quad_scene(ExportOptions::default()).to_document().to_string();

    let positions: Vec<usize> = ["FBXHeaderExtension: ", "Objects: ", "Definitions: ", "Connections: "]
        .iter()
        .map(|root| {
            text.lines()
                .position(|l| l == *root)
                .unwrap_or_else(|| panic!("missing root {}", root))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);

    // every root is followed by a blank line after its closing brace
    let lines: Vec<&str> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if *line == "}" {
            assert_eq!(lines.get(i + 1), Some(&""));
        }
    }
}

#[test]
fn test_braces_balance() {
    let text = animated_quad_scene(ExportOptions::default()).to_document().to_string();
    let mut depth: i32 = 0;
    for line in text.lines() {
        let tabs = line.chars().take_while(|c| *c == '\t').count() as i32;
        match line.trim_start_matches('\t') {
            "{" => {
                assert_eq!(tabs, depth);
                depth += 1;
            }
            "}" => {
                depth -= 1;
                assert_eq!(tabs, depth);
            }
            "" => assert_eq!(depth, 0),
            _ => assert_eq!(tabs, depth, "bad indent: {:?}", line),
        }
    }
    assert_eq!(depth, 0);
}

#[test]
fn test_translation_curve_text() {
    let text = animated_quad_scene(ExportOptions::default()).to_document().to_string();

    assert!(text.contains("\tAnimationCurveNode: "));
    assert!(text.contains("\t\t\tP: \"d|X\", \"Number\", \"\", \"A\", 0.000\n"));
    assert!(text.contains("\t\tKeyTime: \"*2\"\n"));
    assert!(text.contains("\t\t\ta: 0, 769769300\n"));
    assert!(text.contains("\t\t\ta: 0.000, 1.000\n"));
    assert!(text.contains("\"OP\""));
    assert!(text.contains("\"Lcl Translation\""));
    assert!(text.contains("\"Lcl Rotation\""));
    assert!(text.contains("\"Lcl Scaling\""));
}

#[test]
fn test_frame_time_and_rate_options() {
    let options = ExportOptions {
        key_timing: KeyTiming::FrameTime,
        ..Default::default()
    };
    let text = animated_quad_scene(options).to_document().to_string();
    assert!(text.contains("a: 0, 46186158000\n"));

    let options = ExportOptions {
        frame_rate: 30,
        ..Default::default()
    };
    let text = animated_quad_scene(options).to_document().to_string();
    assert!(text.contains("a: 0, 1539538600\n"));
}

#[test]
fn test_concurrent_sessions_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| animated_quad_scene(ExportOptions::default()).to_document()))
        .collect();
    let docs: Vec<Document> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    assert!(docs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_streaming_sink() {
    let scene = animated_quad_scene(ExportOptions::default());
    let mut sink = WriteSink::new(Vec::new());
    let lines = scene.write(&mut sink).expect("Failed to write");
    let bytes = sink.into_inner().expect("Failed to flush");
    let text = String::from_utf8(bytes).expect("not utf-8");
    assert_eq!(text.lines().count(), lines);
}

#[test]
fn test_custom_connection() {
    let mut scene = animated_quad_scene(ExportOptions::default());
    let model = scene.objects().objects()[0].id;
    scene
        .connect(Connection::object_object(
            Endpoint::labeled_object("Model", "card", model),
            Endpoint::label("Model", "Rig"),
        ))
        .expect("Failed to connect");

    let doc = scene.to_document();
    let last = doc.root("Connections").unwrap().children().last().unwrap();
    assert_eq!(last.values()[1], Value::string("Model::card"));
    assert_eq!(last.values()[2], Value::string("Model::Rig"));

    let text = doc.to_string();
    assert!(!text.contains(&format!(", {}, ", model.get())));
    assert!(text.contains("Connect: \"OP\", "));
}

#[test]
fn test_scene_description_file() {
    let json = r#"{
        "meshes": [
            {
                "name": "floor",
                "vertices": [[0,0,0],[1,0,0],[1,0,1],[0,0,1]],
                "normals": [[0,1,0],[0,1,0],[0,1,0],[0,1,0]],
                "indices": [0,1,2,3],
                "topology": "Quads",
                "transform": [2,0,0,0, 0,2,0,0, 0,0,2,0, 5,0,0,1],
                "material": "Stone"
            },
            {
                "name": "broken",
                "vertices": [[0,0,0]],
                "normals": [[0,1,0]],
                "indices": [0,0],
                "topology": "Lines"
            }
        ]
    }"#;
    let temp = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp.path(), json).expect("Failed to write json");

    let description = SceneDescription::load(temp.path()).expect("Failed to load");
    assert_eq!(description.meshes.len(), 2);
    let err = description.build(ExportOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedTopology(_)));

    let mut description = description;
    description.meshes.truncate(1);
    let scene = description.build(ExportOptions::default()).expect("Failed to build");
    let text = scene.to_document().to_string();
    assert!(text.contains("Vertices: 5.000, 0.000, 0.000, 7.000, 0.000, 0.000, 7.000, 0.000, 2.000, 5.000, 0.000, 2.000\n"));
    assert!(text.contains("Connect: \"OO\", \"Material::Stone\", \"Model::floor\"\n"));
}

#[test]
fn test_options_file() {
    let temp = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp.path(), r#"{"creator": "Studio", "comments": []}"#).expect("write");
    let options = ExportOptions::load(temp.path()).expect("Failed to load options");
    assert_eq!(options.creator, "Studio");

    let text = FbxScene::new(options).to_document().to_string();
    assert!(text.starts_with("; Studio\n\n"));
    assert!(text.contains("\tCreator: \"Studio\"\n"));
}

#[test]
fn test_zero_rotation_in_scene_file() {
    let json = r#"{
        "meshes": [{
            "name": "tri",
            "vertices": [[0,0,0],[1,0,0],[0,1,0]],
            "normals": [[0,0,1],[0,0,1],[0,0,1]],
            "indices": [0,1,2],
            "topology": "Triangles",
            "animation": { "frames": [
                { "position": [0,0,0], "rotation": [0,0,0,1] },
                { "position": [1,1,1], "rotation": [0,0,0,0] }
            ]}
        }]
    }"#;
    let temp = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp.path(), json).expect("Failed to write json");

    let description = SceneDescription::load(temp.path()).expect("Failed to load");
    let err = description.build(ExportOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidRotation { frame: 1 }));
}

#[test]
fn test_zero_frame_rate_options_file() {
    let temp = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp.path(), r#"{"frame_rate": 0}"#).expect("write");
    let err = ExportOptions::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidFrameRate(0)));
}
