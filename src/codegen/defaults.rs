//! Default template settings for generated components

/// Package both the wrapper component and its props type are imported from
pub const PACKAGE: &str = "@imile/components";
/// Component every generated icon renders
pub const WRAPPER: &str = "SvgIcon";
/// Props type the generated function accepts
pub const PROPS_TYPE: &str = "SvgIconProps";
/// Appended to the identifier to name the component and its file
pub const COMPONENT_SUFFIX: &str = "Icon";
pub const FILE_EXTENSION: &str = "tsx";
