#![forbid(unsafe_code)]

//! Heun (improved Euler) fixed-step integration for scalar initial value
//! problems.
//!
//! ## Module layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | `api`        | [`HeunOptions`], [`HeunResult`], [`solve_heun`] driver  |
//! | `grid`       | [`uniform_grid`] mesh constructor                       |
//! | `heun`       | [`heun_step`] predictor-corrector step                  |
//! | `metrics`    | [`sum_squared_error`], [`mean_squared_error`]           |
//! | `validation` | input validation and [`HeunValidationError`]            |

pub mod api;
pub mod grid;
pub mod heun;
pub mod metrics;
pub mod validation;

pub use api::{HeunOptions, HeunResult, solve_heun};
pub use grid::uniform_grid;
pub use heun::heun_step;
pub use metrics::{mean_squared_error, sum_squared_error};
pub use validation::{
    HeunValidationError, validate_initial_value, validate_interval, validate_points,
};
