use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A position on screen, in pixels from the top-left corner of the map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(value: u32) -> Self {
        Color {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_hex_string(value: &str) -> Result<Self, Error> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 {
            return Err(Error::UnknownLabel {
                kind: "colour",
                label: value.to_string(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Color::from_hex)
            .map_err(|_| Error::UnknownLabel {
                kind: "colour",
                label: value.to_string(),
            })
    }
}

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Declares a closed set of variants that round-trip through their display label.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| Error::UnknownLabel {
                        kind: $kind,
                        label: s.to_string(),
                    })
            }
        }
    };
}

labelled_enum!(
    /// Lifecycle status of a project.
    Status, "project status" {
        Active => "Active",
        Planning => "Planning",
        Hold => "Hold",
        Completed => "Completed",
    }
);

impl Status {
    /// Badge and map-marker colour for this status.
    pub fn color(self) -> Color {
        match self {
            Status::Active => Color::from_hex(0x22c55e),
            Status::Planning => Color::from_hex(0x3b82f6),
            Status::Hold => Color::from_hex(0xeab308),
            Status::Completed => Color::from_hex(0x6b7280),
        }
    }
}

labelled_enum!(
    Category, "project category" {
        Design => "Design",
        Construction => "Construction",
        Centex => "CENTEX",
    }
);

labelled_enum!(
    OrganisationRole, "organisation role" {
        MainContractor => "Main Contractor",
        SubContractorA => "Sub Contractor A",
        SubContractorB => "Sub Contractor B",
        Consultant => "Consultant",
        Architect => "Architect",
        Manufacturer => "Manufacturer",
    }
);

labelled_enum!(
    OrganisationStatus, "organisation status" {
        Active => "Active",
        OnHold => "On Hold",
        Completed => "Completed",
    }
);

impl OrganisationStatus {
    pub fn color(self) -> Color {
        match self {
            OrganisationStatus::Active => Status::Active.color(),
            OrganisationStatus::OnHold => Status::Hold.color(),
            OrganisationStatus::Completed => Status::Completed.color(),
        }
    }
}

/// Optional attributes shown in the project details panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDetails {
    pub description: Option<String>,
    pub users: Option<u32>,
    pub more_users: Option<u32>,
    pub companies: Vec<String>,
    pub total_docs: Option<u32>,
    pub pending_docs: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub status: Status,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub category: Category,
    pub image: String,
    pub details: ProjectDetails,
}

impl Project {
    pub fn status_color(&self) -> Color {
        self.status.color()
    }

    pub fn with_details(mut self, details: ProjectDetails) -> Self {
        self.details = details;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organisation {
    pub id: String,
    pub name: String,
    pub role: OrganisationRole,
    pub status: OrganisationStatus,
    pub documents_count: u32,
    pub team_members: u32,
    pub pending_tasks: u32,
}
