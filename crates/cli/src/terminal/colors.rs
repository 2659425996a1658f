use crossterm::style::Color;
use envelope_core::error::{Error, Result};
use envelope_core::settings::{ColorDefinition, ThemeDefinition};

use super::types::Tone;

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

fn named_color(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Ok(Some(Color::Rgb { r, g, b })),
            (None, Some(ansi), None) => Ok(Some(Color::AnsiValue(ansi))),
            (None, None, Some(name)) => named_color(name).map(Some),
            (None, None, None) => Ok(None),
            _ => Err(Error::MultipleColorTypes),
        }
    }
}

fn resolve(definition: Option<&ColorDefinition>, fallback: Color) -> Result<Color> {
    match definition {
        Some(definition) => Ok(definition.as_crossterm_color()?.unwrap_or(fallback)),
        None => Ok(fallback),
    }
}

/// Colors used for every piece of output. Passed to whatever prints, never global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub prompt: Color,
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Grey,
            prompt: Color::Red,
            enabled: true,
        }
    }
}

impl Theme {
    /// A theme that writes no escape sequences at all.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Builds a theme from settings, keeping the default color for unset roles.
    ///
    /// # Errors
    ///
    /// Returns an error if a color defines more than one of `rgb`, `ansi` or `name`,
    /// or uses an unknown color name.
    pub fn from_definition(definition: &ThemeDefinition) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            success: resolve(definition.success.as_ref(), defaults.success)?,
            error: resolve(definition.error.as_ref(), defaults.error)?,
            warning: resolve(definition.warning.as_ref(), defaults.warning)?,
            info: resolve(definition.info.as_ref(), defaults.info)?,
            prompt: resolve(definition.prompt.as_ref(), defaults.prompt)?,
            enabled: true,
        })
    }

    /// The color for a tone, or `None` when output should stay uncolored.
    #[must_use]
    pub fn color_for(&self, tone: Tone) -> Option<Color> {
        if !self.enabled {
            return None;
        }

        match tone {
            Tone::Success => Some(self.success),
            Tone::Error => Some(self.error),
            Tone::Warning => Some(self.warning),
            Tone::Info => Some(self.info),
            Tone::Plain => None,
        }
    }
}
