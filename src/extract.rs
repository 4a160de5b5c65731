//! Root element location and viewBox recovery.
//!
//! The grammar in `svg.pest` finds the first `<svg>` element (tag and
//! attribute names are matched case-insensitively) and the nearest closing
//! `</svg>` after it. Attributes are read from the root's opening tag first,
//! then from the tags nested inside it in document order. Sizing is then
//! resolved in a fixed order:
//!
//! 1. the first `viewBox` attribute, which must hold exactly four finite
//!    numbers;
//! 2. the first numeric `width` and `height` attributes, anchored at `0 0`;
//! 3. a 24×24 box.
//!
//! A `viewBox` that is present but malformed is rejected outright rather
//! than falling through to step 2.
//!
//! Parsing never looks past the last complete `</svg>` in the input, so
//! markup with no closing tag is rejected without being parsed at all.

use miette::SourceSpan;
use pest::Parser;
use pest::iterators::Pair;

use crate::errors::{ExtractError, SourceContext, ViewBoxDefect};
use crate::log::debug;
use crate::types::{ExtractedGraphic, ViewBox};
use crate::{Rule, SvgMarkupParser};

/// Width and height used when the root element gives no usable size.
pub const DEFAULT_SIZE: f64 = 24.0;

/// Name given to unnamed input in diagnostics.
const ANONYMOUS_SOURCE: &str = "<input>";

/// Extract the viewBox and inner markup of the first `<svg>` element.
pub fn extract(raw: &str) -> Result<ExtractedGraphic, ExtractError> {
    extract_named(ANONYMOUS_SOURCE, raw)
}

/// Like [`extract`], with `name` (usually the file name) shown in diagnostics.
pub fn extract_named(name: &str, raw: &str) -> Result<ExtractedGraphic, ExtractError> {
    let Some(root) = RootElement::locate(raw) else {
        debug!(source = name, "no <svg> element found");
        return Err(ExtractError::NoSvgRoot);
    };

    let view_box = match root.attribute("viewBox") {
        Some(attr) => {
            let view_box = parse_view_box(attr.value).map_err(|defect| {
                debug!(source = name, value = attr.value, %defect, "rejecting viewBox");
                ExtractError::MalformedViewBox {
                    defect,
                    src: SourceContext::new(name, raw).named_source(),
                    span: attr.span,
                }
            })?;
            debug!(source = name, value = attr.value, "using viewBox");
            view_box
        }
        None => root.fallback_view_box(),
    };

    Ok(ExtractedGraphic::new(view_box, root.content.trim()))
}

/// Whether `raw` contains an `<svg>` element at all. Geometry is not checked.
pub fn looks_like_svg(raw: &str) -> bool {
    RootElement::locate(raw).is_some()
}

/// A quoted attribute on the root element or one of the tags inside it.
#[derive(Debug)]
struct Attribute<'a> {
    name: &'a str,
    value: &'a str,
    /// Location of the value in the full input
    span: SourceSpan,
}

/// The parts of the root element the extractor reads.
#[derive(Debug)]
struct RootElement<'a> {
    /// Root tag attributes, then those of nested tags, in document order
    attributes: Vec<Attribute<'a>>,
    content: &'a str,
}

impl<'a> RootElement<'a> {
    fn locate(raw: &'a str) -> Option<Self> {
        let bounded = &raw[..last_close_tag_end(raw)?];
        let document = SvgMarkupParser::parse(Rule::document, bounded).ok()?.next()?;
        let element = document
            .into_inner()
            .find(|pair| pair.as_rule() == Rule::svg_element)?;

        let mut root = RootElement {
            attributes: Vec::new(),
            content: "",
        };
        for part in element.into_inner() {
            match part.as_rule() {
                Rule::open_tag => root.attributes.extend(tag_attributes(part, 0)),
                Rule::content => {
                    root.content = part.as_str();
                    root.attributes
                        .extend(nested_attributes(part.as_str(), part.as_span().start()));
                }
                _ => {}
            }
        }
        Some(root)
    }

    /// First attribute called `name`, ignoring ASCII case.
    fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    fn fallback_view_box(&self) -> ViewBox {
        match self.dimensions() {
            Some(view_box) => {
                debug!(
                    width = view_box.width(),
                    height = view_box.height(),
                    "no viewBox, using width/height"
                );
                view_box
            }
            None => {
                debug!("no viewBox or usable width/height, using default size");
                default_view_box()
            }
        }
    }

    fn dimensions(&self) -> Option<ViewBox> {
        let width = leading_number(self.attribute("width")?.value)?;
        let height = leading_number(self.attribute("height")?.value)?;
        ViewBox::try_at_origin(width, height).ok()
    }
}

/// Attributes of every tag in the root's content. `offset` is where the
/// content starts in the full input.
fn nested_attributes(content: &str, offset: usize) -> Vec<Attribute<'_>> {
    let Ok(mut pairs) = SvgMarkupParser::parse(Rule::inner_markup, content) else {
        return Vec::new();
    };
    let Some(markup) = pairs.next() else {
        return Vec::new();
    };
    markup
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::child_tag)
        .flat_map(|tag| tag_attributes(tag, offset))
        .collect()
}

fn tag_attributes(tag: Pair<'_, Rule>, offset: usize) -> Vec<Attribute<'_>> {
    tag.into_inner()
        .filter(|pair| pair.as_rule() == Rule::attributes)
        .flat_map(|attributes| attributes.into_inner())
        .filter(|pair| pair.as_rule() == Rule::attribute)
        .filter_map(|attr| {
            let mut inner = attr.into_inner();
            let name = inner.next()?;
            let value = inner.next()?;
            let span = value.as_span();
            Some(Attribute {
                name: name.as_str(),
                value: value.as_str(),
                span: (offset + span.start()..offset + span.end()).into(),
            })
        })
        .collect()
}

/// End of the last `</svg>` (any case, optional whitespace before `>`).
fn last_close_tag_end(raw: &str) -> Option<usize> {
    const CLOSE: &[u8] = b"</svg";
    let bytes = raw.as_bytes();
    let mut search_end = bytes.len();
    while let Some(start) = bytes[..search_end]
        .windows(CLOSE.len())
        .rposition(|window| window.eq_ignore_ascii_case(CLOSE))
    {
        let rest = &bytes[start + CLOSE.len()..];
        let spaces = rest
            .iter()
            .take_while(|&&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            .count();
        if rest.get(spaces) == Some(&b'>') {
            return Some(start + CLOSE.len() + spaces + 1);
        }
        search_end = start + CLOSE.len() - 1;
    }
    None
}

fn default_view_box() -> ViewBox {
    ViewBox::try_at_origin(DEFAULT_SIZE, DEFAULT_SIZE)
        .unwrap_or_else(|_| unreachable!("default size is finite"))
}

/// Parse `min-x min-y width height`.
fn parse_view_box(value: &str) -> Result<ViewBox, ViewBoxDefect> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let &[x, y, width, height] = tokens.as_slice() else {
        return Err(ViewBoxDefect::TokenCount(tokens.len()));
    };

    let number = |token: &str| {
        token.parse::<f64>().map_err(|_| ViewBoxDefect::NotANumber {
            token: token.to_string(),
        })
    };
    Ok(ViewBox::try_new(
        number(x)?,
        number(y)?,
        number(width)?,
        number(height)?,
    )?)
}

/// Parse the longest numeric prefix of `text`, so `"24px"` reads as 24.
///
/// Returns `None` when there is no prefix or it is not finite.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
