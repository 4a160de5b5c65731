//! End-to-end conversions through the public API.

use regex_lite::Regex;
use svgicon::{
    ExtractError, GeneratorOptions, ViewBox, ViewBoxDefect, convert, convert_with_options,
    extract, generate, looks_like_svg, output_file_name, to_identifier,
};

/// Exported component name and props type of generated source.
fn exported_component(source: &str) -> (String, String) {
    let re = Regex::new(r"export function (\w+)\(props: (\w+)\) \{").unwrap();
    let caps = re.captures(source).expect("no exported component");
    (caps[1].to_string(), caps[2].to_string())
}

fn view_box_prop(source: &str) -> String {
    let re = Regex::new(r#"<\w+ viewBox="([^"]*)" \{\.\.\.props\}>"#).unwrap();
    let caps = re.captures(source).expect("no viewBox prop");
    caps[1].to_string()
}

#[test]
fn view_box_document() {
    let svg = r#"<svg viewBox="0 0 24 24"><path d="M1 1"/></svg>"#;
    let graphic = extract(svg).unwrap();
    assert_eq!(*graphic.view_box(), ViewBox::try_new(0.0, 0.0, 24.0, 24.0).unwrap());

    assert_eq!(to_identifier("home-filled"), "HomeFilled");
    let source = generate("home-filled", &graphic);
    assert_eq!(view_box_prop(&source), "0 0 24 24");
    assert_eq!(
        exported_component(&source),
        ("HomeFilledIcon".to_string(), "SvgIconProps".to_string())
    );
    assert_eq!(output_file_name("home-filled"), "HomeFilledIcon.tsx");
}

#[test]
fn width_height_document() {
    let graphic = extract(r#"<svg width="16" height="16"><rect/></svg>"#).unwrap();
    assert_eq!(*graphic.view_box(), ViewBox::try_at_origin(16.0, 16.0).unwrap());
    assert_eq!(view_box_prop(&generate("x", &graphic)), "0 0 16 16");
}

#[test]
fn not_svg_document() {
    assert!(matches!(extract("<div>not svg</div>"), Err(ExtractError::NoSvgRoot)));
    assert!(!looks_like_svg("<div>not svg</div>"));
}

#[test]
fn three_token_view_box() {
    let err = extract(r#"<svg viewBox="a b c"><g/></svg>"#).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::MalformedViewBox {
            defect: ViewBoxDefect::TokenCount(3),
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "invalid SVG content: malformed viewBox (expected 4 numbers, found 3)"
    );
}

#[test]
fn mixed_separators_in_base_name() {
    assert_eq!(to_identifier("my.icon_v2 final"), "MyIconV2Final");
}

#[test]
fn file_name_agrees_with_component_name() {
    let svg = "<svg viewBox='0 0 10 10'><g/></svg>";
    for name in ["home-filled", "x", "ARROW_up", "a.b.c", "2fa code", "---"] {
        let conversion = convert(svg, name).unwrap();
        let (component, _) = exported_component(&conversion.source);
        assert_eq!(conversion.file_name, format!("{component}.tsx"), "for {name:?}");
    }
}

#[test]
fn custom_template() {
    let options = GeneratorOptions::new()
        .package("@acme/icons")
        .wrapper("BaseIcon")
        .props_type("BaseIconProps");
    let conversion = convert_with_options(
        r#"<svg viewBox="0 0 32 32"><path d="M4 4h24"/></svg>"#,
        "menu",
        &options,
    )
    .unwrap();

    assert_eq!(conversion.file_name, "MenuIcon.tsx");
    insta::assert_snapshot!(conversion.source, @r#"
    import { BaseIcon } from '@acme/icons';

    import type { BaseIconProps } from '@acme/icons';

    export function MenuIcon(props: BaseIconProps) {
      return (
        <BaseIcon viewBox="0 0 32 32" {...props}>
          <path d="M4 4h24"/>
        </BaseIcon>
      );
    }
    "#);
}

#[test]
fn success_message_after_conversion() {
    let conversion = convert("<svg></svg>", "blank").unwrap();
    assert_eq!(
        conversion.success_message(),
        "Successfully created React component: BlankIcon.tsx"
    );
}

#[test]
fn conversions_run_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let svg = format!(r#"<svg viewBox="0 0 {i} {i}"><g/></svg>"#);
                convert(&svg, &format!("icon-{i}")).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let conversion = handle.join().unwrap();
        assert_eq!(conversion.file_name, format!("Icon{i}Icon.tsx"));
        assert_eq!(view_box_prop(&conversion.source), format!("0 0 {i} {i}"));
    }
}
