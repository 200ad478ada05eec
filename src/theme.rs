use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        self.is_dark()
    }

    /// Shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

/// Background/text class pairs swapped across every section on theme change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav: &'static str,
    pub band: &'static str,
    pub tile: &'static str,
    pub card: &'static str,
    pub muted_text: &'static str,
    pub tag: &'static str,
}

const LIGHT: Palette = Palette {
    page: "bg-gray-50 text-gray-900",
    nav: "bg-white",
    band: "bg-white",
    tile: "bg-white",
    card: "bg-white",
    muted_text: "text-gray-700",
    tag: "bg-gray-100 text-gray-700",
};

const DARK: Palette = Palette {
    page: "bg-gray-900 text-white",
    nav: "bg-gray-800",
    band: "bg-gray-800",
    tile: "bg-gray-800",
    card: "bg-gray-700",
    muted_text: "text-gray-300",
    tag: "bg-gray-600 text-white",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_the_flag() {
        assert_eq!(Theme::Dark.palette().page, "bg-gray-900 text-white");
        assert_eq!(Theme::Light.palette().page, "bg-gray-50 text-gray-900");
        assert_eq!(Theme::Dark.palette(), Theme::Light.toggled().palette());
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }

    #[test]
    fn serializes_as_data_theme_value() {
        let value = serde_json::to_value(Theme::Dark).expect("theme serializes");
        assert_eq!(value, serde_json::json!(Theme::Dark.as_str()));
    }
}
