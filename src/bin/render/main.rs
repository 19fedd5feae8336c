use anyhow::Context;
use env_logger::Env;
use std::io::Read;

/// Renders a post body, read from a file argument or stdin, to HTML on
/// stdout. Useful for previewing the markup pipeline outside the app.
fn main() -> anyhow::Result<()> {
    init_lib_mods();
    soapbox::app_config::init();

    let body = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let limit = soapbox::app_config::limits().max_post_length as usize;
    if body.len() > limit {
        log::warn!(
            "post body is {} bytes, over the {} byte limit; rendering anyway",
            body.len(),
            limit
        );
    }

    let con = soapbox::markup::Constructor::from_config();
    print!("{}", con.build(&body));
    Ok(())
}

/// Initialize third party crates we rely on but don't have control over.
fn init_lib_mods() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
}
