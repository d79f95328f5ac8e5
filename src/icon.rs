//! Closed set of line icons used by the page, keyed by their lucide names.
//!
//! Timeline data refers to icons by name, so lookups go through
//! [`IconSlot::resolve`], which keeps unknown names around for the error
//! marker instead of failing.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// One primitive of a 24x24 stroked icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgNode {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
        rx: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    BookOpen,
    Briefcase,
    Calendar,
    ChevronDown,
    Code,
    Github,
    Globe,
    GraduationCap,
    Heart,
    Laptop,
    Lightbulb,
    Linkedin,
    Mail,
    Rocket,
    Star,
    Terminal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown icon: {0}")]
pub struct UnknownIcon(pub String);

impl Icon {
    pub const ALL: [Icon; 17] = [
        Icon::Award,
        Icon::BookOpen,
        Icon::Briefcase,
        Icon::Calendar,
        Icon::ChevronDown,
        Icon::Code,
        Icon::Github,
        Icon::Globe,
        Icon::GraduationCap,
        Icon::Heart,
        Icon::Laptop,
        Icon::Lightbulb,
        Icon::Linkedin,
        Icon::Mail,
        Icon::Rocket,
        Icon::Star,
        Icon::Terminal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "Award",
            Icon::BookOpen => "BookOpen",
            Icon::Briefcase => "Briefcase",
            Icon::Calendar => "Calendar",
            Icon::ChevronDown => "ChevronDown",
            Icon::Code => "Code",
            Icon::Github => "Github",
            Icon::Globe => "Globe",
            Icon::GraduationCap => "GraduationCap",
            Icon::Heart => "Heart",
            Icon::Laptop => "Laptop",
            Icon::Lightbulb => "Lightbulb",
            Icon::Linkedin => "Linkedin",
            Icon::Mail => "Mail",
            Icon::Rocket => "Rocket",
            Icon::Star => "Star",
            Icon::Terminal => "Terminal",
        }
    }

    pub fn nodes(self) -> &'static [SvgNode] {
        use SvgNode::*;
        match self {
            Icon::Award => &[
                Circle { cx: "12", cy: "8", r: "6" },
                Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Icon::BookOpen => &[
                Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            Icon::Briefcase => &[
                Path("M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
                Rect { x: "2", y: "6", width: "20", height: "14", rx: "2" },
            ],
            Icon::Calendar => &[
                Path("M8 2v4"),
                Path("M16 2v4"),
                Rect { x: "3", y: "4", width: "18", height: "18", rx: "2" },
                Path("M3 10h18"),
            ],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::Code => &[Path("m16 18 6-6-6-6"), Path("m8 6-6 6 6 6")],
            Icon::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Globe => &[
                Circle { cx: "12", cy: "12", r: "10" },
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            Icon::GraduationCap => &[
                Path("M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z"),
                Path("M22 10v6"),
                Path("M6 12.5V16a6 3 0 0 0 12 0v-3.5"),
            ],
            Icon::Heart => &[Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            Icon::Laptop => &[Path(
                "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16",
            )],
            Icon::Lightbulb => &[
                Path("M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"),
                Path("M9 18h6"),
                Path("M10 22h4"),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: "2", y: "9", width: "4", height: "12", rx: "0" },
                Circle { cx: "4", cy: "4", r: "2" },
            ],
            Icon::Mail => &[
                Rect { x: "2", y: "4", width: "20", height: "16", rx: "2" },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Rocket => &[
                Path("M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"),
                Path("m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"),
                Path("M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"),
                Path("M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"),
            ],
            Icon::Star => &[Path(
                "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z",
            )],
            Icon::Terminal => &[Path("m4 17 6-6-6-6"), Path("M12 19h8")],
        }
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a timeline entry's icon name turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSlot {
    Symbol(Icon),
    Invalid(String),
}

impl IconSlot {
    pub fn resolve(name: &str) -> Self {
        match name.parse::<Icon>() {
            Ok(icon) => IconSlot::Symbol(icon),
            Err(UnknownIcon(name)) => IconSlot::Invalid(name),
        }
    }

    pub fn marker_text(name: &str) -> String {
        format!("Ícone inválido: {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_round_trips_by_name() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
            assert!(!icon.nodes().is_empty(), "{icon} has no shapes");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(
            "github".parse::<Icon>(),
            Err(UnknownIcon("github".to_string()))
        );
        assert_eq!(IconSlot::resolve("Github"), IconSlot::Symbol(Icon::Github));
    }

    #[test]
    fn test_unknown_icon_degrades_to_marker() {
        let slot = IconSlot::resolve("NotARealIcon");
        assert_eq!(slot, IconSlot::Invalid("NotARealIcon".to_string()));
        assert_eq!(
            IconSlot::marker_text("NotARealIcon"),
            "Ícone inválido: NotARealIcon"
        );
        assert_eq!(IconSlot::resolve(""), IconSlot::Invalid(String::new()));
    }

    #[test]
    fn test_paths_are_drawing_commands() {
        for icon in Icon::ALL {
            for node in icon.nodes() {
                if let SvgNode::Path(d) = node {
                    let first = d.chars().next().unwrap_or_default();
                    assert!(first == 'M' || first == 'm', "{icon}: {d}");
                }
            }
        }
    }
}
