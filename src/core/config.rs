use log::debug;

use super::terminal::{ColorSupport, TerminalInfo};
use crate::decoder::LoadOptions;
use crate::renderer::OutputFormat;

/// What the user asked for on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShowOptions {
    pub format: Option<OutputFormat>,
    /// Maximum width in terminal columns.
    pub width: Option<u32>,
    /// Maximum height in terminal rows.
    pub height: Option<u32>,
    pub no_resize: bool,
}

/// Settings shared by every image printed in one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub load: LoadOptions,
    /// Column count handed to inline-image terminals.
    pub inline_width: Option<u32>,
}

impl Settings {
    pub fn resolve(options: &ShowOptions, terminal: &TerminalInfo) -> Self {
        let format = resolve_format(options.format, terminal);

        let load = if options.no_resize {
            LoadOptions::default()
        } else {
            let fallback_width = terminal.is_tty.then_some(terminal.columns as u32);
            LoadOptions {
                max_width: options.width.or(fallback_width),
                // Each cell holds two pixel rows.
                max_height: options.height.map(|rows| rows.saturating_mul(2)),
            }
        };

        let settings = Self {
            format,
            load,
            inline_width: options.width,
        };
        debug!("settings: {:?}", settings);
        settings
    }
}

/// An explicit format wins. Otherwise use what the terminal can do, and 256
/// colors when output is not a terminal.
pub fn resolve_format(requested: Option<OutputFormat>, terminal: &TerminalInfo) -> OutputFormat {
    if let Some(format) = requested {
        return format;
    }
    if !terminal.is_tty {
        return OutputFormat::Ansi256;
    }
    if terminal.inline_images {
        return OutputFormat::Iterm2;
    }
    match terminal.colors {
        ColorSupport::TrueColor => OutputFormat::TrueColor,
        ColorSupport::Ansi256 => OutputFormat::Ansi256,
        ColorSupport::Ansi8 | ColorSupport::None => OutputFormat::Ansi8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn terminal(is_tty: bool, colors: ColorSupport, inline_images: bool) -> TerminalInfo {
        TerminalInfo {
            columns: 100,
            rows: 40,
            is_tty,
            colors,
            inline_images,
        }
    }

    #[test]
    fn explicit_format_wins() {
        let t = terminal(true, ColorSupport::TrueColor, true);
        assert_eq!(resolve_format(Some(OutputFormat::Ansi8), &t), OutputFormat::Ansi8);
    }

    #[test]
    fn pipes_get_256_colors() {
        let t = terminal(false, ColorSupport::TrueColor, true);
        assert_eq!(resolve_format(None, &t), OutputFormat::Ansi256);
    }

    #[test]
    fn terminal_capabilities_pick_format() {
        assert_eq!(
            resolve_format(None, &terminal(true, ColorSupport::Ansi256, true)),
            OutputFormat::Iterm2
        );
        assert_eq!(
            resolve_format(None, &terminal(true, ColorSupport::TrueColor, false)),
            OutputFormat::TrueColor
        );
        assert_eq!(
            resolve_format(None, &terminal(true, ColorSupport::Ansi256, false)),
            OutputFormat::Ansi256
        );
        assert_eq!(
            resolve_format(None, &terminal(true, ColorSupport::None, false)),
            OutputFormat::Ansi8
        );
    }

    #[test]
    fn tty_width_limits_images() {
        let settings = Settings::resolve(&ShowOptions::default(), &terminal(true, ColorSupport::Ansi256, false));
        assert_eq!(
            settings.load,
            LoadOptions {
                max_width: Some(100),
                max_height: None
            }
        );
        assert_eq!(settings.inline_width, None);
    }

    #[test]
    fn explicit_limits_and_pipes() {
        let options = ShowOptions {
            width: Some(30),
            height: Some(10),
            ..ShowOptions::default()
        };
        let settings = Settings::resolve(&options, &terminal(false, ColorSupport::None, false));
        assert_eq!(
            settings.load,
            LoadOptions {
                max_width: Some(30),
                max_height: Some(20)
            }
        );
        assert_eq!(settings.inline_width, Some(30));

        let settings = Settings::resolve(&ShowOptions::default(), &terminal(false, ColorSupport::None, false));
        assert_eq!(settings.load, LoadOptions::default());
    }

    #[test]
    fn no_resize_drops_all_limits() {
        let options = ShowOptions {
            width: Some(30),
            no_resize: true,
            ..ShowOptions::default()
        };
        let settings = Settings::resolve(&options, &terminal(true, ColorSupport::Ansi256, false));
        assert_eq!(settings.load, LoadOptions::default());
    }
}
