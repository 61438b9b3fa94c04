//! Float helpers that work with and without `std`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("carousel requires either the `std` or the `libm` feature for float math");

#[cfg(feature = "std")]
pub(crate) fn powf(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn powf(base: f64, exp: f64) -> f64 {
    libm::pow(base, exp)
}

#[cfg(feature = "std")]
pub(crate) fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn round(x: f64) -> f64 {
    libm::round(x)
}

pub(crate) fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}
