use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::format;
use crate::input::LineReader;

pub const FIELDS: &[FieldSpec] = &[FieldSpec::new("radius", FieldKind::Float)];

/// Five-digit π. Outputs are defined against this value, not `std::f64::consts::PI`.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

pub fn area(radius: f64) -> f64 {
    PI * radius * radius
}

pub fn solve(reader: &mut LineReader<'_>) -> Result<Transcript, InputError> {
    let field = reader.next_field(FIELDS[0].name)?;
    let radius = field.float()?;

    let mut out = Transcript::new();
    out.push(format!("Radius: {}", field.text()));
    out.push(format!("PI constant: {}", format::fixed(PI, 5)));
    out.push(format!(
        "Circumference: {}",
        format::fixed(circumference(radius), 4)
    ));
    out.push(format!("Area: {}", format::fixed(area(radius), 5)));
    Ok(out)
}
