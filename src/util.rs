/// Integer division helpers.
///
/// Division and modulus round toward negative infinity, so the sign of a
/// remainder always follows the divisor. All helpers report division by zero
/// and overflow as errors instead of panicking.
pub mod num;
