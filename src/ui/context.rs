use crate::config::{ColorMode, Config, Verbosity};
use crate::presentation::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity: config.output.verbosity.raised_by(verbose),
            caps,
            color: color && !json,
            unicode,
        }
    }

    /// Per-file lines in the console
    pub fn show_details(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    /// Suppress everything but failures
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
        }
    }

    #[test]
    fn cli_color_flag_overrides_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;

        let ctx = UiContext::from_caps(false, 0, Some(ColorWhen::Never), &config, tty_caps());
        assert!(!ctx.color);
    }

    #[test]
    fn ci_disables_auto_color() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ctx = UiContext::from_caps(false, 0, None, &Config::default(), caps);
        assert!(!ctx.color);
    }

    #[test]
    fn json_never_colors() {
        let ctx = UiContext::from_caps(true, 0, Some(ColorWhen::Always), &Config::default(), tty_caps());
        assert!(!ctx.color);
    }

    #[test]
    fn verbose_flag_enables_details() {
        let ctx = UiContext::from_caps(false, 1, None, &Config::default(), tty_caps());
        assert!(ctx.show_details());
        assert!(!UiContext::from_caps(false, 0, None, &Config::default(), tty_caps()).show_details());
    }

    #[test]
    fn unicode_follows_config() {
        let mut config = Config::default();
        config.output.unicode = false;
        let ctx = UiContext::from_caps(false, 0, None, &config, tty_caps());
        assert!(!ctx.unicode);
    }
}
