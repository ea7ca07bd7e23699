//! Menu of calculator operations

/// One entry of the calculator menu, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    DotProduct,
    CrossProduct,
    VectorProjection,
    Magnitude,
    ScalarProjection,
    TripleProduct,
    Angle,
    UnitVector,
    PlaneEquation,
    LineEquation,
    /// Accepted as choice 13 but never listed; prints a placeholder.
    UniqueVector,
}

impl Operation {
    /// Listed entries, in menu order.
    pub const MENU: [Operation; 12] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::DotProduct,
        Operation::CrossProduct,
        Operation::VectorProjection,
        Operation::Magnitude,
        Operation::ScalarProjection,
        Operation::TripleProduct,
        Operation::Angle,
        Operation::UnitVector,
        Operation::PlaneEquation,
        Operation::LineEquation,
    ];

    pub fn from_choice(choice: i64) -> Option<Self> {
        let op = match choice {
            1 => Operation::Addition,
            2 => Operation::Subtraction,
            3 => Operation::DotProduct,
            4 => Operation::CrossProduct,
            5 => Operation::VectorProjection,
            6 => Operation::Magnitude,
            7 => Operation::ScalarProjection,
            8 => Operation::TripleProduct,
            9 => Operation::Angle,
            10 => Operation::UnitVector,
            11 => Operation::PlaneEquation,
            12 => Operation::LineEquation,
            13 => Operation::UniqueVector,
            _ => return None,
        };
        Some(op)
    }

    pub fn choice(self) -> i64 {
        match self {
            Operation::Addition => 1,
            Operation::Subtraction => 2,
            Operation::DotProduct => 3,
            Operation::CrossProduct => 4,
            Operation::VectorProjection => 5,
            Operation::Magnitude => 6,
            Operation::ScalarProjection => 7,
            Operation::TripleProduct => 8,
            Operation::Angle => 9,
            Operation::UnitVector => 10,
            Operation::PlaneEquation => 11,
            Operation::LineEquation => 12,
            Operation::UniqueVector => 13,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "Vector Addition",
            Operation::Subtraction => "Vector Subtraction",
            Operation::DotProduct => "Dot Product",
            Operation::CrossProduct => "Cross Product",
            Operation::VectorProjection => "Vector Projection",
            Operation::Magnitude => "Magnitude",
            Operation::ScalarProjection => "Scalar Projection",
            Operation::TripleProduct => "Vector Triple Product",
            Operation::Angle => "Angle Between Vectors",
            Operation::UnitVector => "Unit Vector",
            Operation::PlaneEquation => "Plane Equation",
            Operation::LineEquation => "Line Equation",
            Operation::UniqueVector => "Unique Vector",
        }
    }
}

/// The numbered menu shown after both vectors are entered.
pub fn render_menu() -> String {
    let entries: String = Operation::MENU
        .iter()
        .map(|op| format!("{}. {}\n", op.choice(), op.label()))
        .collect();
    format!("\nChoose a vector operation:\n{entries}")
}
