//! FBX ASCII format constants.
//!
//! Target is the 6.1.0 ASCII dialect; anything that is a wire-format
//! contract (separators, versions, boilerplate numbers) lives here.

/// File extension of written documents.
pub const FILE_EXTENSION: &str = "fbx";

pub const FBX_VERSION_MAJOR: i64 = 6;
pub const FBX_VERSION_MINOR: i64 = 1;
pub const FBX_VERSION_RELEASE: i64 = 0;

/// `FBXVersion` header value (6.1.0 => 6100).
pub const FBX_VERSION: i64 =
    FBX_VERSION_MAJOR * 1000 + FBX_VERSION_MINOR * 100 + FBX_VERSION_RELEASE * 10;

/// `FBXHeaderVersion` header value.
pub const FBX_HEADER_VERSION: i64 = 1003;

/// Prefix of comment lines.
pub(crate) const COMMENT_TAG: &str = "; ";

/// Separator between values on one line.
pub(crate) const VALUE_SEPARATOR: &str = ", ";

/// One level of indentation.
pub(crate) const INDENT: &str = "\t";

/// Digits after the decimal point for float values.
pub(crate) const FLOAT_PRECISION: usize = 3;

// Model / geometry boilerplate
pub(crate) const MODEL_VERSION: i64 = 232;
pub(crate) const GEOMETRY_VERSION: i64 = 124;
pub(crate) const NORMAL_LAYER_VERSION: i64 = 101;
pub(crate) const LAYER_VERSION: i64 = 100;
pub(crate) const NORMAL_MAPPING: &str = "ByPolygonVertex";
pub(crate) const NORMAL_REFERENCE: &str = "Direct";

/// Layer element types every mesh layer enumerates.
pub(crate) const LAYER_ELEMENT_TYPES: [&str; 5] = [
    "LayerElementNormal",
    "LayerElementSmoothing",
    "LayerElementUV",
    "LayerElementTexture",
    "LayerElementMaterial",
];

// Animation curve boilerplate
pub(crate) const KEY_VER: i64 = 4008;
/// Cubic | TangentAuto | GenericTimeIndependent | GenericClampProgressive
pub(crate) const KEY_ATTR_FLAGS: &str = "24840";

pub(crate) const DEFINITIONS_VERSION: i64 = 100;
pub(crate) const CURVE_NODE_TEMPLATE: &str = "FbxAnimCurveNode";
