//! Convert an SVG file (or a built-in sample) and print the component.
//!
//! Run with: cargo run --example convert --features tracing -- path/to/icon.svg

use svgicon::host::{NO_SVG_FILE, base_name_of, is_svg_path};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let (base_name, input) = match std::env::args().nth(1) {
        Some(path) if is_svg_path(&path) => {
            let input = std::fs::read_to_string(&path)
                .map_err(|e| miette::miette!("failed to read {path}: {e}"))?;
            (base_name_of(&path).to_string(), input)
        }
        Some(_) => return Err(miette::miette!("{NO_SVG_FILE}")),
        None => (
            "home-filled".to_string(),
            r#"<svg viewBox="0 0 24 24"><path d="M12 3 2 12h3v8h14v-8h3z"/></svg>"#.to_string(),
        ),
    };

    let conversion = svgicon::convert(&input, &base_name)?;
    eprintln!("// {}", conversion.file_name);
    println!("{}", conversion.source);
    Ok(())
}
