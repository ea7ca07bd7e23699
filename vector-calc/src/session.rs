//! One calculator run: read two vectors, show the menu, perform one operation
//!
//! [`Session`] is generic over its input and output so the whole transcript
//! can be driven from memory in tests. Input is consumed as a stream of
//! tokens, so line breaks are just whitespace. All numbers are printed to two
//! decimal places.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};
use vector_calc_core::{
    add, angle_degrees, cross, dot, line_equation_text, magnitude, plane_equation_text,
    scalar_projection, subtract, triple_product, unit, vector_projection, Components, Vec3,
};

use crate::error::SessionError;
use crate::input::{parse_choice, parse_component, tokenize};
use crate::menu::{render_menu, Operation};

const FIRST_VECTOR_PROMPT: &str = "Enter components of the first 3D vector (x y z): ";
const SECOND_VECTOR_PROMPT: &str = "Enter components of the second 3D vector (x y z): ";
const THIRD_VECTOR_PROMPT: &str = "Enter components of the third 3D vector (x y z): ";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const PLANE_NORMAL_PROMPT: &str = "Enter the normal vector of the plane (x y z): ";
const PLANE_POINT_PROMPT: &str = "Enter a point on the plane (x y z): ";
const LINE_POINT_PROMPT: &str = "Enter a point on the line (x y z): ";
const LINE_DIRECTION_PROMPT: &str = "Enter the direction vector of the line (x y z): ";

const INVALID_CHOICE: &str = "Invalid choice. Please choose a valid option from the menu.";
const UNIQUE_VECTOR_PLACEHOLDER: &str = "This is the Unique Vector operation.";

pub struct Session<R, W> {
    input: R,
    output: W,
    /// Tokens read but not yet consumed.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Run the session to completion.
    ///
    /// Once a menu choice has been read the session always ends in `Ok(())`,
    /// even if input runs out before an operation gets its extra vectors.
    ///
    /// # Errors
    /// Returns [`SessionError::UnexpectedEof`] if input runs out before the
    /// menu choice, or [`SessionError::Io`] if the streams fail.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let first = self.read_vec3(FIRST_VECTOR_PROMPT)?;
        let second = self.read_vec3(SECOND_VECTOR_PROMPT)?;

        write!(self.output, "{}", render_menu())?;
        self.prompt(CHOICE_PROMPT)?;
        let token = self.next_token()?;

        match parse_choice(&token).and_then(Operation::from_choice) {
            Some(op) => {
                info!(choice = op.choice(), operation = op.label(), "Performing operation");
                match self.perform(op, first, second) {
                    Err(SessionError::UnexpectedEof) => {
                        warn!(operation = op.label(), "Input ended before the operation could run");
                        writeln!(self.output)?;
                    }
                    result => result?,
                }
            }
            None => {
                info!(input = %token, "Unrecognized menu choice");
                writeln!(self.output, "{INVALID_CHOICE}")?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn perform(&mut self, op: Operation, a: Vec3, b: Vec3) -> Result<(), SessionError> {
        let (va, vb) = (Components(&a), Components(&b));

        match op {
            Operation::Addition => {
                let sum = add(a, b);
                writeln!(
                    self.output,
                    "Vector Addition: {va} + {vb} = {}",
                    Components(&sum)
                )?;
            }
            Operation::Subtraction => {
                let difference = subtract(a, b);
                writeln!(
                    self.output,
                    "Vector Subtraction: {va} - {vb} = {}",
                    Components(&difference)
                )?;
            }
            Operation::DotProduct => {
                writeln!(self.output, "Dot Product: {:.2}", dot(a, b))?;
            }
            Operation::CrossProduct => {
                let product = cross(a, b);
                writeln!(
                    self.output,
                    "Cross Product: {va} x {vb} = {}",
                    Components(&product)
                )?;
            }
            Operation::VectorProjection => {
                let projection = vector_projection(a, b);
                writeln!(
                    self.output,
                    "Vector Projection: {va} projected onto {vb} = {}",
                    Components(&projection)
                )?;
            }
            Operation::Magnitude => {
                writeln!(self.output, "Magnitude of Vector 1: {:.2}", magnitude(a))?;
                writeln!(self.output, "Magnitude of Vector 2: {:.2}", magnitude(b))?;
            }
            Operation::ScalarProjection => {
                writeln!(
                    self.output,
                    "Scalar Projection of Vector 1 onto Vector 2: {:.2}",
                    scalar_projection(a, b)
                )?;
            }
            Operation::TripleProduct => {
                let c = self.read_vec3(THIRD_VECTOR_PROMPT)?;
                let product = triple_product(a, b, c);
                writeln!(
                    self.output,
                    "Vector Triple Product: {va} x ({vb} x {}) = {}",
                    Components(&c),
                    Components(&product)
                )?;
            }
            Operation::Angle => {
                writeln!(
                    self.output,
                    "Angle Between Vectors 1 and 2: {:.2} degrees",
                    angle_degrees(a, b)
                )?;
            }
            Operation::UnitVector => {
                writeln!(self.output, "Unit Vector of Vector 1: {}", Components(&unit(a)))?;
                writeln!(self.output, "Unit Vector of Vector 2: {}", Components(&unit(b)))?;
            }
            Operation::PlaneEquation => {
                let normal = self.read_vec3(PLANE_NORMAL_PROMPT)?;
                let point = self.read_vec3(PLANE_POINT_PROMPT)?;
                writeln!(
                    self.output,
                    "Plane Equation: {}",
                    plane_equation_text(normal, point)
                )?;
            }
            Operation::LineEquation => {
                let point = self.read_vec3(LINE_POINT_PROMPT)?;
                let direction = self.read_vec3(LINE_DIRECTION_PROMPT)?;
                writeln!(
                    self.output,
                    "Line Equation: {}",
                    line_equation_text(point, direction)
                )?;
            }
            Operation::UniqueVector => {
                writeln!(self.output, "{UNIQUE_VECTOR_PLACEHOLDER}")?;
            }
        }

        Ok(())
    }

    /// Prompt until three valid components have been read.
    ///
    /// A bad component discards the rest of the buffered tokens before the
    /// prompt is repeated.
    fn read_vec3(&mut self, prompt: &str) -> Result<Vec3, SessionError> {
        'prompt: loop {
            self.prompt(prompt)?;
            let mut components = [0.0; 3];
            for slot in &mut components {
                let token = self.next_token()?;
                match parse_component(&token) {
                    Ok(value) => *slot = value,
                    Err(e) => {
                        debug!(error = %e, discarded = self.pending.len(), "Rejected vector input");
                        self.pending.clear();
                        writeln!(self.output, "Invalid input: {e}. Please try again.")?;
                        continue 'prompt;
                    }
                }
            }
            return Ok(Vec3::from(components));
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next token, reading further lines until one is available.
    fn next_token(&mut self) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::UnexpectedEof);
            }
            self.pending.extend(tokenize(&line).map(str::to_string));
        }
    }
}
