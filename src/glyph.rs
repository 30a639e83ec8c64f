//! Small ASCII drawings of die faces.
//!
//! Only the usual polyhedral dice have a drawing; every other side count
//! is shown as a bare number.

pub type Renderer = fn(u32) -> String;

static RENDERERS: &[(u32, Renderer)] = &[
    (4, pyramid),
    (6, square),
    (8, pyramid),
    (10, kite),
    (12, dodecagon),
    (20, triangle),
];

/// Drawing function for a die with `sides` sides, if there is one.
pub fn renderer(sides: u32) -> Option<Renderer> {
    RENDERERS
        .iter()
        .find(|(s, _)| *s == sides)
        .map(|(_, render)| *render)
}

/// Side counts that have a drawing.
pub fn supported_sides() -> impl Iterator<Item = u32> {
    RENDERERS.iter().map(|(sides, _)| *sides)
}

/// Draw `face` for a die with `sides` sides, falling back to the number.
pub fn render_face(sides: u32, face: u32) -> String {
    match renderer(sides) {
        Some(render) => render(face),
        None => face.to_string(),
    }
}

// d4 and d8
fn pyramid(face: u32) -> String {
    format!("   _\n  / \\\n / {face} \\\n/_____\\\n")
}

// d6
fn square(face: u32) -> String {
    format!(" _____\n|     | \n|  {face}  | \n|_____| \n")
}

// d10 has no 10, it shows 0 instead
fn kite(face: u32) -> String {
    let digit = face % 10;
    format!("   _\n  / \\\n / {digit} \\\n \"._.\"\n")
}

// d12
fn dodecagon(face: u32) -> String {
    format!("   __\n .\"  \".\n \\ {face:>2} /\n  ----\n")
}

// d20
fn triangle(face: u32) -> String {
    format!("   /\\\n  /  \\\n / {face:>2} \\\n/______\\\n")
}
