//! Turn SVG documents into TSX icon components.
//!
//! Conversion runs in two stages. [`extract`] finds the first `<svg>`
//! element and recovers its `viewBox` and inner markup; [`generate`] pastes
//! both into a component that renders them through a shared `SvgIcon`
//! wrapper. [`convert`] runs the whole pipeline.
//!
//! ```
//! let svg = r#"<svg viewBox="0 0 24 24"><path d="M1 1"/></svg>"#;
//! let conversion = svgicon::convert(svg, "home-filled").unwrap();
//!
//! assert_eq!(conversion.file_name, "HomeFilledIcon.tsx");
//! assert!(conversion.source.contains("export function HomeFilledIcon(props: SvgIconProps)"));
//! assert!(conversion.source.contains(r#"<SvgIcon viewBox="0 0 24 24" {...props}>"#));
//! ```
//!
//! Nothing here touches the file system. Reading the source file, asking
//! before overwriting and writing the result are left to the caller; see
//! [`host`] for the small pure helpers such callers share.

use pest_derive::Parser;

pub mod codegen;
pub mod errors;
pub mod extract;
pub mod host;
pub mod log;
pub mod types;

pub use codegen::{
    GeneratorOptions, generate, generate_with_options, output_file_name,
    output_file_name_with_options, to_identifier,
};
pub use errors::{ExtractError, ViewBoxDefect};
pub use extract::{extract, extract_named, looks_like_svg};
pub use types::{Conversion, ExtractedGraphic, NumericError, ViewBox};

#[derive(Parser)]
#[grammar = "svg.pest"]
pub struct SvgMarkupParser;

/// Convert SVG source into a component module named after `base_name`.
///
/// Returns the output file name and generated source, or the reason the
/// input was rejected.
pub fn convert(raw: &str, base_name: &str) -> Result<Conversion, ExtractError> {
    convert_with_options(raw, base_name, &GeneratorOptions::default())
}

/// Like [`convert`], with explicit template settings.
pub fn convert_with_options(
    raw: &str,
    base_name: &str,
    options: &GeneratorOptions,
) -> Result<Conversion, ExtractError> {
    let graphic = extract_named(base_name, raw)?;
    Ok(Conversion {
        file_name: output_file_name_with_options(base_name, options),
        source: generate_with_options(base_name, &graphic, options),
    })
}
