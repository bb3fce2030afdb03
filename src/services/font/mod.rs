// Font provisioning service
// Downloads and registers the chart font once per process

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use plotters::style::FontStyle;
use std::path::PathBuf;
use std::sync::OnceLock;

/// NanumGothic covers Hangul names alongside Latin text and renders the
/// legend glyphs cleanly, which is why the chart keeps using it.
const FONT_FAMILY: &str = "NanumGothic";
const FONT_FILE: &str = "NanumGothic-Regular.ttf";
const FONT_URL: &str =
    "https://github.com/google/fonts/raw/main/ofl/nanumgothic/NanumGothic-Regular.ttf";

static CHART_FONT: OnceLock<Option<&'static str>> = OnceLock::new();

/// Family name of the registered chart font, memoized for the process
/// lifetime. `None` when provisioning failed; the renderer then draws
/// bars and grid without any text instead of failing the whole chart.
pub fn chart_font() -> Option<&'static str> {
    *CHART_FONT.get_or_init(|| match install() {
        Ok(()) => Some(FONT_FAMILY),
        Err(err) => {
            log::warn!("chart font unavailable, labels disabled: {err:#}");
            None
        }
    })
}

fn install() -> Result<()> {
    let bytes = load_or_fetch()?;
    // Registered faces live for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    for style in [FontStyle::Normal, FontStyle::Bold] {
        plotters::style::register_font(FONT_FAMILY, style, bytes)
            .map_err(|_| anyhow!("font data rejected by the text engine"))?;
    }
    Ok(())
}

fn load_or_fetch() -> Result<Vec<u8>> {
    let path = cache_path()?;
    if let Ok(bytes) = std::fs::read(&path) {
        return Ok(bytes);
    }

    log::info!("downloading chart font to {}", path.display());
    let response = reqwest::blocking::get(FONT_URL)
        .context("requesting chart font")?
        .error_for_status()
        .context("chart font request failed")?;
    let bytes = response.bytes().context("reading chart font body")?.to_vec();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    if let Err(err) = std::fs::write(&path, &bytes) {
        // Next launch downloads again; rendering this session is fine.
        log::warn!("could not cache chart font: {err}");
    }

    Ok(bytes)
}

fn cache_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "family-timetable")
        .context("no home directory for the font cache")?;
    Ok(dirs.data_dir().join(FONT_FILE))
}
