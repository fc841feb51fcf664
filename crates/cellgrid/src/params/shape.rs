//! Closed shape families for incells and outcells.
//!
//! Each variant carries its own dimensions. Everything that differs between
//! shapes (slit-side extent, footprint polygons, chamfers) is answered here so
//! the rest of the crate never branches on a shape name.

use std::f64::consts::FRAC_PI_6;

use serde::{Deserialize, Serialize};

use crate::geom::{heptagon, hexagon, octagon, Footprint};

/// Position of an incell relative to the nearest slit row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncellRole {
    /// Not adjacent to a slit row.
    Interior,
    /// Directly above an outcell row; its bottom edge is truncated.
    SlitTop,
    /// Directly below an outcell row; its top edge is truncated.
    SlitBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase", deny_unknown_fields)]
pub enum IncellShape {
    Circle { dia_incell: f64 },
    /// Flat-to-flat diameter `dia_incell`, flats facing ±x.
    Hexagon { dia_incell: f64 },
}

impl IncellShape {
    pub const NAMES: [&'static str; 2] = ["circle", "hexagon"];

    pub fn name(&self) -> &'static str {
        match self {
            IncellShape::Circle { .. } => "circle",
            IncellShape::Hexagon { .. } => "hexagon",
        }
    }

    pub fn dia_incell(&self) -> f64 {
        match *self {
            IncellShape::Circle { dia_incell } | IncellShape::Hexagon { dia_incell } => dia_incell,
        }
    }

    pub(crate) fn with_dia(self, dia_incell: f64) -> Self {
        match self {
            IncellShape::Circle { .. } => IncellShape::Circle { dia_incell },
            IncellShape::Hexagon { .. } => IncellShape::Hexagon { dia_incell },
        }
    }

    /// Hexagon incells next to a slit use a truncated (heptagon) footprint.
    pub fn has_slit_variants(&self) -> bool {
        matches!(self, IncellShape::Hexagon { .. })
    }

    /// Distance from the centre to the edge facing the slit.
    pub fn slit_side_extent(&self) -> f64 {
        match *self {
            IncellShape::Circle { dia_incell } => 0.5 * dia_incell,
            // heptagon flat
            IncellShape::Hexagon { dia_incell } => 0.5 * dia_incell * FRAC_PI_6.cos(),
        }
    }

    /// Distance from the centre to the far (untruncated) end along y.
    pub fn end_extent(&self) -> f64 {
        match *self {
            IncellShape::Circle { dia_incell } => 0.5 * dia_incell,
            IncellShape::Hexagon { dia_incell } => 0.5 * dia_incell / FRAC_PI_6.cos(),
        }
    }

    /// Footprint used for boundary filtering.
    ///
    /// Circles are tested with radius `dia_incell`, which keeps a full diameter
    /// of clearance to the boundary.
    pub fn footprint(&self, role: IncellRole) -> Footprint {
        match *self {
            IncellShape::Circle { dia_incell } => Footprint::Circle { radius: dia_incell },
            IncellShape::Hexagon { dia_incell } => polygon_for(0.5 * dia_incell, role),
        }
    }

    /// Open cross-section left after membrane coating, `eff_dia` across.
    pub fn opening(&self, role: IncellRole, eff_dia: f64) -> Footprint {
        match self {
            IncellShape::Circle { .. } => Footprint::Circle {
                radius: 0.5 * eff_dia,
            },
            IncellShape::Hexagon { .. } => polygon_for(0.5 * eff_dia, role),
        }
    }
}

fn polygon_for(r_in: f64, role: IncellRole) -> Footprint {
    Footprint::Polygon(match role {
        IncellRole::Interior => hexagon(r_in),
        IncellRole::SlitTop => heptagon(r_in, 0.0),
        IncellRole::SlitBottom => heptagon(r_in, 180.0),
    })
}

fn default_chamfer_ratio() -> f64 {
    0.25
}

fn default_chamfer_angle_deg() -> f64 {
    30.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase", deny_unknown_fields)]
pub enum OutcellShape {
    /// Rectangle with chamfered corners.
    ///
    /// `chamfer_ratio` scales the chamfer leg taken from the outcell width (wide
    /// cells) or from the outcell wall (tall cells); `chamfer_angle_deg` is the
    /// chamfer's angle to the x axis.
    Octagon {
        thk_outcell: f64,
        thk_wall_outcell: f64,
        #[serde(default = "default_chamfer_ratio")]
        chamfer_ratio: f64,
        #[serde(default = "default_chamfer_angle_deg")]
        chamfer_angle_deg: f64,
    },
    Square {
        thk_outcell: f64,
        thk_wall_outcell: f64,
    },
}

impl OutcellShape {
    pub const NAMES: [&'static str; 2] = ["octagon", "square"];

    pub fn name(&self) -> &'static str {
        match self {
            OutcellShape::Octagon { .. } => "octagon",
            OutcellShape::Square { .. } => "square",
        }
    }

    /// Outcell height (y extent).
    pub fn thk_outcell(&self) -> f64 {
        match *self {
            OutcellShape::Octagon { thk_outcell, .. } | OutcellShape::Square { thk_outcell, .. } => {
                thk_outcell
            }
        }
    }

    pub fn thk_wall_outcell(&self) -> f64 {
        match *self {
            OutcellShape::Octagon {
                thk_wall_outcell, ..
            }
            | OutcellShape::Square {
                thk_wall_outcell, ..
            } => thk_wall_outcell,
        }
    }

    pub(crate) fn scaled(self, scale: f64) -> Self {
        match self {
            OutcellShape::Octagon {
                thk_outcell,
                thk_wall_outcell,
                chamfer_ratio,
                chamfer_angle_deg,
            } => OutcellShape::Octagon {
                thk_outcell: thk_outcell / scale,
                thk_wall_outcell: thk_wall_outcell / scale,
                chamfer_ratio,
                chamfer_angle_deg,
            },
            OutcellShape::Square {
                thk_outcell,
                thk_wall_outcell,
            } => OutcellShape::Square {
                thk_outcell: thk_outcell / scale,
                thk_wall_outcell: thk_wall_outcell / scale,
            },
        }
    }

    /// Chamfer legs `(chamfer_x, chamfer_y)` for an outcell of the given width.
    /// Always zero for a square.
    pub fn chamfer(&self, width: f64) -> (f64, f64) {
        match *self {
            OutcellShape::Square { .. } => (0.0, 0.0),
            OutcellShape::Octagon {
                thk_outcell,
                thk_wall_outcell,
                chamfer_ratio,
                chamfer_angle_deg,
            } => {
                let slope = chamfer_angle_deg.to_radians().tan();
                if thk_outcell / width >= 1.0 {
                    let cx = chamfer_ratio * width;
                    (cx, cx * slope)
                } else {
                    let cy = chamfer_ratio * thk_wall_outcell;
                    (cy / slope, cy)
                }
            }
        }
    }

    /// Footprint for an outcell of the given width.
    pub fn footprint(&self, width: f64) -> Footprint {
        let (cx, cy) = self.chamfer(width);
        Footprint::Polygon(octagon(width, self.thk_outcell(), cx, cy))
    }
}
