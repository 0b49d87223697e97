//! Method-of-characteristics design of minimum-length supersonic nozzles.
//!
//! The throat is modelled as a sharp corner that turns the flow through a
//! fan of `n` characteristics. Each fan line is marched across the nozzle:
//! interior points come from the unit process (intersection of a C+ and a
//! C- characteristic under the Riemann-invariant compatibility relations),
//! and every line is closed at the wall so that the exit flow is uniform and
//! axial. The lower half of the flow is never computed; the centerline point
//! of each line is mirrored to seed the next one.
//!
//! Coordinates are normalised so the throat half-height is 1.

pub mod error;
pub mod geometry;
pub mod march;
pub mod params;
pub mod point;
pub mod throat;
pub mod unit_process;
pub mod wall;

pub use error::{MocError, MocResult};
pub use march::{
    Nozzle, advance_line, design_nozzle, design_nozzle_with_table, expected_point_count, march,
};
pub use params::{DesignParameters, MAX_CHARACTERISTICS};
pub use point::{Point, PointKind, Position, RiemannInvariants};
pub use throat::{fan_angles, seed_throat, throat_angle};
pub use unit_process::{flow_point, fold_line};
pub use wall::wall_point;
