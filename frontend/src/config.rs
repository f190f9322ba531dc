use log::Level;

pub const CHECKED_KEY: &str = "skier_scavenger_checked_v1";
pub const TEAM_KEY: &str = "skier_scavenger_team_v1";

/// Photos a skier team has to check off before the submit form opens.
pub const MIN_TO_SUBMIT: usize = 2;

pub const ART_STROLL_URL: &str = "https://cvma.com/gondola-art-stroll/";

const DEFAULT_FORM_URL: &str = "https://airtable.com/embed/appegpE7zvT7aotvm/pagT6CbV2bE5zgRiv/form";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Embedded submission form. Can be pointed at another form at build time
/// with `SCAVENGER_FORM_URL`.
pub fn form_embed_url() -> &'static str {
    resolve_form_url(option_env!("SCAVENGER_FORM_URL"))
}

fn resolve_form_url(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => DEFAULT_FORM_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_form_url_uses_default() {
        assert_eq!(resolve_form_url(None), DEFAULT_FORM_URL);
    }

    #[test]
    fn blank_form_url_uses_default() {
        assert_eq!(resolve_form_url(Some("")), DEFAULT_FORM_URL);
        assert_eq!(resolve_form_url(Some("   ")), DEFAULT_FORM_URL);
    }

    #[test]
    fn configured_form_url_wins() {
        assert_eq!(
            resolve_form_url(Some(" https://example.com/embed/form ")),
            "https://example.com/embed/form"
        );
    }
}
