//! Animation curve graph builder.
//!
//! One animated object needs, per channel (translation, rotation, scale), an
//! `AnimationCurveNode` plus one `AnimationCurve` per axis, wired together:
//!
//! ```text
//! AnimCurve --OP "d|X"--> AnimCurveNode --OP "Lcl Translation"--> Model
//!                         AnimCurveNode --OO--------------------> AnimLayer
//! ```
//!
//! Frames are sampled directly; there is no resampling or curve fitting.

use tracing::debug;

use crate::core::{ktime_from_frame, ktime_from_seconds, AnimFrame, AnimObject, KTime};
use crate::util::{Error, Result, Vec3};

use super::super::connection::{Connection, ConnectionRegistry, Endpoint};
use super::super::constants::{KEY_ATTR_FLAGS, KEY_VER};
use super::super::object::{ObjectId, ObjectRegistry};
use super::super::options::{ExportOptions, KeyTiming};
use super::super::property::PropertyNode;
use super::super::value::Value;

/// Per-axis property names on a curve node.
pub const AXIS_PROPERTIES: [&str; 3] = ["d|X", "d|Y", "d|Z"];

/// Animated transform channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Translation,
    Rotation,
    Scale,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Translation, Channel::Rotation, Channel::Scale];

    /// Curve node name suffix (`AnimCurveNode::T`).
    pub fn short_name(self) -> &'static str {
        match self {
            Channel::Translation => "T",
            Channel::Rotation => "R",
            Channel::Scale => "S",
        }
    }

    /// Model property the curve node drives.
    pub fn model_property(self) -> &'static str {
        match self {
            Channel::Translation => "Lcl Translation",
            Channel::Rotation => "Lcl Rotation",
            Channel::Scale => "Lcl Scaling",
        }
    }

    /// Channel value of one frame; rotation as Euler degrees.
    pub fn sample(self, frame: &AnimFrame) -> Vec3 {
        match self {
            Channel::Translation => frame.position,
            Channel::Rotation => frame.rotation_euler(),
            Channel::Scale => frame.scale,
        }
    }

    /// Per-axis curves over all frames.
    pub fn curves(self, anim: &AnimObject) -> [Vec<f32>; 3] {
        match self {
            Channel::Translation => anim.position_curves(),
            Channel::Rotation => anim.rotation_curves(),
            Channel::Scale => anim.scale_curves(),
        }
    }
}

/// Objects created for one animated object.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveGraph {
    /// Curve nodes in [`Channel::ALL`] order.
    pub curve_nodes: [ObjectId; 3],
    /// Curves per channel, X/Y/Z.
    pub curves: [[ObjectId; 3]; 3],
}

/// Register an `AnimationLayer` object.
pub fn add_anim_layer(objects: &mut ObjectRegistry, name: &str) -> ObjectId {
    let object = objects.create_object("AnimationLayer");
    let id = object.id;
    object
        .definition
        .add_value(id.get() as i64)
        .add_value(format!("AnimLayer::{}", name))
        .add_value("")
        .open_block();
    id
}

/// Key timestamps for every frame.
pub fn key_times(anim: &AnimObject, options: &ExportOptions) -> Vec<KTime> {
    match options.key_timing {
        KeyTiming::FrameIndex => (0..anim.len())
            .map(|i| ktime_from_frame(i, options.frame_rate))
            .collect(),
        KeyTiming::FrameTime => anim.frames.iter().map(|f| ktime_from_seconds(f.time)).collect(),
    }
}

fn curve_node_definition(id: ObjectId, channel: Channel, initial: Vec3) -> PropertyNode {
    let mut node = PropertyNode::new("AnimationCurveNode")
        .with_value(id.get() as i64)
        .with_value(format!("AnimCurveNode::{}", channel.short_name()))
        .with_value("");
    let props = node.add_property("Properties70");
    for (axis, value) in AXIS_PROPERTIES.iter().zip(initial.to_array()) {
        props
            .add_property("P")
            .add_value(*axis)
            .add_value("Number")
            .add_value("")
            .add_value("A")
            .add_value(value);
    }
    node
}

/// Encoded keys of one curve.
struct CurveKeys {
    times: Value,
    values: Value,
    count: usize,
}

impl CurveKeys {
    fn encode(times: &[KTime], values: &[f32]) -> Result<Self> {
        Ok(Self {
            times: Value::ints(times.iter().copied())?,
            values: Value::floats(values.iter().copied())?,
            count: values.len(),
        })
    }
}

fn curve_definition(id: ObjectId, keys: CurveKeys) -> PropertyNode {
    let count = format!("*{}", keys.count);
    let mut curve = PropertyNode::new("AnimationCurve")
        .with_value(id.get() as i64)
        .with_value("AnimCurve::")
        .with_value("");

    curve.add_property_with("Default", 0);
    curve.add_property_with("KeyVer", KEY_VER);
    curve
        .add_property_with("KeyTime", count.as_str())
        .add_property_with("a", keys.times);
    curve
        .add_property_with("KeyValueFloat", count.as_str())
        .add_property_with("a", keys.values);

    let flags = curve.add_property_with("KeyAttrFlags", "*1");
    flags.add_comment("KeyAttrFlags = Cubic | TangentAuto | GenericTimeIndependent | GenericClampProgressive");
    flags.add_property_with("a", KEY_ATTR_FLAGS);

    curve
        .add_property_with("KeyAttrRefCount", "*1")
        .add_property_with("a", keys.count);
    curve
}

/// Build the curve node / curve graph animating `target` on `layer`.
///
/// Fails before registering anything when the animation has no frames, a
/// frame cannot be sampled, the options are invalid or either endpoint is
/// not registered. The model is referenced by its `Model::<name>` label.
pub fn build_curve_graph(
    anim: &AnimObject,
    target: ObjectId,
    target_name: &str,
    layer: ObjectId,
    objects: &mut ObjectRegistry,
    connections: &mut ConnectionRegistry,
    options: &ExportOptions,
) -> Result<CurveGraph> {
    let first = anim.frames.first().ok_or(Error::EmptyAnimation)?;
    anim.validate()?;
    options.validate()?;
    for id in [target, layer] {
        if !objects.contains(id) {
            return Err(Error::UnknownObject(id.get()));
        }
    }

    let times = key_times(anim, options);

    // Encode every definition before touching the registry.
    let mut node_defs = Vec::with_capacity(3);
    let mut curve_keys = Vec::with_capacity(3);
    for channel in Channel::ALL {
        node_defs.push((channel, channel.sample(first)));
        let [x, y, z] = channel.curves(anim);
        curve_keys.push([
            CurveKeys::encode(&times, &x)?,
            CurveKeys::encode(&times, &y)?,
            CurveKeys::encode(&times, &z)?,
        ]);
    }

    let mut curve_nodes = Vec::with_capacity(3);
    for (channel, initial) in node_defs {
        let object = objects.create_object("AnimationCurveNode");
        object.definition = curve_node_definition(object.id, channel, initial);
        curve_nodes.push(object.id);
    }

    let mut curves = [[curve_nodes[0]; 3]; 3];
    for (per_channel, axes) in curves.iter_mut().zip(curve_keys) {
        for (slot, keys) in per_channel.iter_mut().zip(axes) {
            let object = objects.create_object("AnimationCurve");
            object.definition = curve_definition(object.id, keys);
            *slot = object.id;
        }
    }

    let layer_name = &options.anim_layer_name;
    for (&channel, &node) in Channel::ALL.iter().zip(&curve_nodes) {
        connections.add(
            Connection::object_property(
                Endpoint::object("AnimCurveNode", channel.short_name(), node),
                Endpoint::labeled_object("Model", target_name, target),
                channel.model_property(),
            ),
            objects,
        )?;
    }
    for (&channel, &node) in Channel::ALL.iter().zip(&curve_nodes) {
        connections.add(
            Connection::object_object(
                Endpoint::object("AnimCurveNode", channel.short_name(), node),
                Endpoint::object("AnimLayer", layer_name, layer),
            ),
            objects,
        )?;
    }
    for ((&channel, &node), per_channel) in Channel::ALL.iter().zip(&curve_nodes).zip(&curves) {
        for (axis, &curve) in AXIS_PROPERTIES.iter().zip(per_channel) {
            connections.add(
                Connection::object_property(
                    Endpoint::object("AnimCurve", "", curve),
                    Endpoint::object("AnimCurveNode", channel.short_name(), node),
                    axis,
                ),
                objects,
            )?;
        }
    }

    debug!(
        model = %target,
        frames = anim.len(),
        "built animation curve graph"
    );
    Ok(CurveGraph {
        curve_nodes: [curve_nodes[0], curve_nodes[1], curve_nodes[2]],
        curves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KTIME_SECOND;
    use crate::util::Quat;

    fn setup() -> (ObjectRegistry, ConnectionRegistry, ObjectId, ObjectId) {
        let mut objects = ObjectRegistry::new();
        let model = objects.create_object("Model").id;
        let layer = add_anim_layer(&mut objects, "BaseLayer");
        (objects, ConnectionRegistry::new(), model, layer)
    }

    fn two_frames() -> AnimObject {
        let mut anim = AnimObject::new();
        anim.add_frame(Vec3::ZERO, Quat::IDENTITY, 0.0);
        anim.add_frame(Vec3::ONE, Quat::IDENTITY, 1.0);
        anim
    }

    fn child_values<'a>(node: &'a PropertyNode, name: &str) -> &'a Value {
        &node.child(name).unwrap().child("a").unwrap().values()[0]
    }

    #[test]
    fn test_layer_definition() {
        let mut objects = ObjectRegistry::new();
        let id = add_anim_layer(&mut objects, "BaseLayer");
        let def = &objects.get(id).unwrap().definition;
        assert_eq!(def.values_text(), format!("{}, \"AnimLayer::BaseLayer\", \"\"", id));
        assert!(def.has_block());
    }

    #[test]
    fn test_graph_shape() {
        let (mut objects, mut connections, model, layer) = setup();
        let graph = build_curve_graph(
            &two_frames(),
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &ExportOptions::default(),
        )
        .unwrap();

        assert_eq!(objects.count_of("AnimationCurveNode"), 3);
        assert_eq!(objects.count_of("AnimationCurve"), 9);
        assert_eq!(connections.len(), 15);

        // first three: curve node -> model property
        let labels: Vec<&str> = connections.connections()[..3]
            .iter()
            .map(|c| c.property.as_str())
            .collect();
        assert_eq!(labels, vec!["Lcl Translation", "Lcl Rotation", "Lcl Scaling"]);
        assert!(connections.connections()[3..6]
            .iter()
            .all(|c| c.to.object == Some(layer) && c.property.is_empty()));

        let curve_ty = &connections.connections()[7];
        assert_eq!(curve_ty.from.object, Some(graph.curves[0][1]));
        assert_eq!(curve_ty.to.object, Some(graph.curve_nodes[0]));
        assert_eq!(curve_ty.property, "d|Y");

        for c in connections.connections() {
            for id in [c.from.object, c.to.object].into_iter().flatten() {
                assert!(objects.contains(id));
            }
        }
    }

    #[test]
    fn test_translation_values() {
        let (mut objects, mut connections, model, layer) = setup();
        let graph = build_curve_graph(
            &two_frames(),
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &ExportOptions::default(),
        )
        .unwrap();

        let node = &objects.get(graph.curve_nodes[0]).unwrap().definition;
        assert_eq!(node.values()[1], Value::string("AnimCurveNode::T"));
        let props: Vec<String> = node
            .child("Properties70")
            .unwrap()
            .children()
            .iter()
            .map(PropertyNode::values_text)
            .collect();
        assert_eq!(
            props,
            vec![
                "\"d|X\", \"Number\", \"\", \"A\", 0.000",
                "\"d|Y\", \"Number\", \"\", \"A\", 0.000",
                "\"d|Z\", \"Number\", \"\", \"A\", 0.000",
            ]
        );

        let curve_x = &objects.get(graph.curves[0][0]).unwrap().definition;
        assert_eq!(child_values(curve_x, "KeyValueFloat"), &Value::floats([0.0, 1.0]).unwrap());
        assert_eq!(child_values(curve_x, "KeyTime"), &Value::ints([0, 769_769_300]).unwrap());
        assert_eq!(curve_x.child("KeyTime").unwrap().values_text(), "\"*2\"");
        assert_eq!(child_values(curve_x, "KeyAttrRefCount"), &Value::int(2));

        // scale initial value is the unit scale of frame 0
        let scale = &objects.get(graph.curve_nodes[2]).unwrap().definition;
        let sx = &scale.child("Properties70").unwrap().children()[0];
        assert_eq!(sx.values()[4], Value::float(1.0));
    }

    #[test]
    fn test_frame_time_keys() {
        let (mut objects, mut connections, model, layer) = setup();
        let options = ExportOptions { key_timing: KeyTiming::FrameTime, ..Default::default() };
        let graph = build_curve_graph(
            &two_frames(),
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &options,
        )
        .unwrap();
        let curve = &objects.get(graph.curves[1][2]).unwrap().definition;
        assert_eq!(child_values(curve, "KeyTime"), &Value::ints([0, KTIME_SECOND]).unwrap());
    }

    #[test]
    fn test_empty_animation_creates_nothing() {
        let (mut objects, mut connections, model, layer) = setup();
        let before = objects.len();
        let err = build_curve_graph(
            &AnimObject::new(),
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &ExportOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyAnimation));
        assert_eq!(objects.len(), before);
        assert!(connections.is_empty());
    }

    #[test]
    fn test_zero_quaternion_creates_nothing() {
        let (mut objects, mut connections, model, layer) = setup();
        let before = objects.len();
        let mut anim = two_frames();
        anim.frames[1].rotation = Quat::from_xyzw(0.0, 0.0, 0.0, 0.0);

        let err = build_curve_graph(
            &anim,
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &ExportOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRotation { frame: 1 }));
        assert_eq!(objects.len(), before);
        assert!(connections.is_empty());
    }

    #[test]
    fn test_zero_frame_rate_creates_nothing() {
        let (mut objects, mut connections, model, layer) = setup();
        let before = objects.len();
        let options = ExportOptions { frame_rate: 0, ..Default::default() };
        let err = build_curve_graph(
            &two_frames(),
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidFrameRate(0)));
        assert_eq!(objects.len(), before);
    }

    #[test]
    fn test_model_written_by_label() {
        let (mut objects, mut connections, model, layer) = setup();
        let graph = build_curve_graph(
            &two_frames(),
            model,
            "cube",
            layer,
            &mut objects,
            &mut connections,
            &ExportOptions::default(),
        )
        .unwrap();

        let first = &connections.connections()[0];
        assert_eq!(first.to.object, Some(model));
        assert_eq!(
            first.to_node().values_text(),
            format!(
                "\"OP\", {}, \"Model::cube\", \"Lcl Translation\"",
                graph.curve_nodes[0].get()
            )
        );
    }

    #[test]
    fn test_unknown_target_creates_nothing() {
        let (mut objects, mut connections, _model, layer) = setup();
        let mut elsewhere = ObjectRegistry::new();
        for _ in 0..5 {
            elsewhere.create_object("Model");
        }
        let stranger = elsewhere.create_object("Model").id;

        let before = objects.len();
        let err = build_curve_graph(
            &two_frames(),
            stranger,
            "ghost",
            layer,
            &mut objects,
            &mut connections,
            &ExportOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownObject(_)));
        assert_eq!(objects.len(), before);
    }
}
