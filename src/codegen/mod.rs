//! TSX component generation
//!
//! This module is organized into submodules:
//! - `defaults`: Package, wrapper and file naming used unless overridden
//! - `identifier`: Base name to identifier conversion
//!
//! Generation is plain template expansion. The extracted markup is pasted
//! in as-is and never re-serialized, so identical inputs always produce
//! byte-identical output.

pub mod defaults;
pub mod identifier;

pub use identifier::to_identifier;

use crate::log::trace;
use crate::types::{ExtractedGraphic, ViewBox};

/// Template parameters for generated components.
///
/// The defaults import `SvgIcon`/`SvgIconProps` from `@imile/components`
/// and write `{Identifier}Icon.tsx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Package the wrapper and props type are imported from
    pub package: String,
    /// Wrapper component rendered around the markup
    pub wrapper: String,
    /// Props type of the wrapper
    pub props_type: String,
    /// Appended to the identifier for the component and file name
    pub suffix: String,
    /// Output file extension, without the dot
    pub extension: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: defaults::PACKAGE.to_string(),
            wrapper: defaults::WRAPPER.to_string(),
            props_type: defaults::PROPS_TYPE.to_string(),
            suffix: defaults::COMPONENT_SUFFIX.to_string(),
            extension: defaults::FILE_EXTENSION.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = wrapper.into();
        self
    }

    pub fn props_type(mut self, props_type: impl Into<String>) -> Self {
        self.props_type = props_type.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Name of the exported component for `base_name`.
    pub fn component_name(&self, base_name: &str) -> String {
        format!("{}{}", to_identifier(base_name), self.suffix)
    }
}

/// Generate a component module with the default template settings.
pub fn generate(base_name: &str, graphic: &ExtractedGraphic) -> String {
    generate_with_options(base_name, graphic, &GeneratorOptions::default())
}

/// Generate a component module.
pub fn generate_with_options(
    base_name: &str,
    graphic: &ExtractedGraphic,
    options: &GeneratorOptions,
) -> String {
    let component = options.component_name(base_name);
    trace!(base_name, component = %component, "generating component");

    let GeneratorOptions {
        package,
        wrapper,
        props_type,
        ..
    } = options;
    let view_box = view_box_attr(graphic.view_box());
    let content = graphic.inner_content();

    format!(
        "import {{ {wrapper} }} from '{package}';

import type {{ {props_type} }} from '{package}';

export function {component}(props: {props_type}) {{
  return (
    <{wrapper} viewBox=\"{view_box}\" {{...props}}>
      {content}
    </{wrapper}>
  );
}}
"
    )
}

/// Output file name for `base_name` with the default template settings.
pub fn output_file_name(base_name: &str) -> String {
    output_file_name_with_options(base_name, &GeneratorOptions::default())
}

/// Output file name for `base_name`. Its stem is the generated component name.
pub fn output_file_name_with_options(base_name: &str, options: &GeneratorOptions) -> String {
    format!("{}.{}", options.component_name(base_name), options.extension)
}

/// Render the `viewBox` attribute value. A box without offsets starts at `0 0`.
pub fn view_box_attr(view_box: &ViewBox) -> String {
    let (x, y) = view_box.origin().unwrap_or((0.0, 0.0));
    format!(
        "{} {} {} {}",
        fmt_num(x),
        fmt_num(y),
        fmt_num(view_box.width()),
        fmt_num(view_box.height())
    )
}

/// Format a number in its shortest natural decimal form (`24`, `0.5`).
/// Negative zero prints as `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
