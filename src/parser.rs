//! Tokenizer and state machine turning path-description text into segments.
//!
//! Parsing is permissive: numeric text that cannot be read becomes `0.0`,
//! leading text before the first command and trailing arguments short of a
//! full argument group are dropped, and every such recovery is logged at warn
//! level. Malformed input therefore degrades the path instead of failing it.

use crate::error::PathError;
use crate::segment::{CubicBezier, EllipticalArc, Line, QuadraticBezier, Segment};
use crate::utils::angle_between_points;

use glam::DVec2;
use log::warn;
use std::f64::consts::PI;

/// The command letters of the path mini-language. Uppercase commands take
/// absolute coordinates, lowercase commands coordinates relative to the
/// current point.
const COMMAND_LETTERS: [char; 20] = ['m', 'M', 'l', 'L', 'v', 'V', 'h', 'H', 'z', 'Z', 'c', 'C', 'q', 'Q', 't', 'T', 's', 'S', 'a', 'A'];

/// Parse a path description into its ordered segment sequence.
///
/// Fails with [PathError::EmptyInput] when the text is empty or whitespace-only;
/// all other input parses under the permissive policy described at the module level.
pub fn parse_path_data(data: &str) -> Result<Vec<Segment>, PathError> {
	if data.trim().is_empty() {
		return Err(PathError::EmptyInput);
	}

	let mut parser = Parser::default();
	for (command, arguments_text) in command_chunks(data) {
		parser.parse_chunk(command, &scan_numbers(arguments_text));
	}
	Ok(parser.segments)
}

/// Split the text into command-prefixed chunks: each recognized command letter
/// starts a new chunk that runs until the next command letter.
fn command_chunks(data: &str) -> Vec<(char, &str)> {
	let mut chunks = Vec::new();
	let mut command = None;
	let mut chunk_start = 0;

	for (index, character) in data.char_indices() {
		if COMMAND_LETTERS.contains(&character) {
			match command {
				Some(letter) => chunks.push((letter, &data[chunk_start..index])),
				None if !data[..index].trim().is_empty() => warn!("ignoring path data {:?} before the first command", data[..index].trim()),
				None => {}
			}
			command = Some(character);
			chunk_start = index + character.len_utf8();
		}
	}

	match command {
		Some(letter) => chunks.push((letter, &data[chunk_start..])),
		None => warn!("path data contains no commands"),
	}
	chunks
}

/// Extract every floating-point literal (integer, decimal, or exponential
/// notation, optionally signed) from `text`, in order. Signs also delimit
/// literals, so packed coordinates like `10-5` read as two numbers. A literal
/// that scans but fails to parse is substituted with `0.0`.
fn scan_numbers(text: &str) -> Vec<f64> {
	let bytes = text.as_bytes();
	let mut numbers = Vec::new();
	let mut index = 0;

	while index < bytes.len() {
		let byte = bytes[index];
		let starts_literal = byte.is_ascii_digit() || byte == b'.' || ((byte == b'+' || byte == b'-') && bytes.get(index + 1).is_some_and(|next| next.is_ascii_digit() || *next == b'.'));
		if !starts_literal {
			index += 1;
			continue;
		}

		let literal_start = index;
		if byte == b'+' || byte == b'-' {
			index += 1;
		}
		let mut seen_digits = false;
		while index < bytes.len() && bytes[index].is_ascii_digit() {
			index += 1;
			seen_digits = true;
		}
		if index < bytes.len() && bytes[index] == b'.' {
			index += 1;
			while index < bytes.len() && bytes[index].is_ascii_digit() {
				index += 1;
				seen_digits = true;
			}
		}
		if !seen_digits {
			// A lone sign or dot is separator noise, not a literal.
			continue;
		}
		if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
			// Consume an exponent only when digits actually follow it.
			let mut exponent_end = index + 1;
			if exponent_end < bytes.len() && (bytes[exponent_end] == b'+' || bytes[exponent_end] == b'-') {
				exponent_end += 1;
			}
			let exponent_digits_start = exponent_end;
			while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
				exponent_end += 1;
			}
			if exponent_end > exponent_digits_start {
				index = exponent_end;
			}
		}

		let literal = &text[literal_start..index];
		numbers.push(literal.parse().unwrap_or_else(|_| {
			warn!("substituting 0 for unreadable number {literal:?}");
			0.
		}));
	}
	numbers
}

fn command_arity(command: char) -> usize {
	match command {
		'h' | 'H' | 'v' | 'V' => 1,
		'm' | 'M' | 'l' | 'L' | 't' | 'T' => 2,
		'q' | 'Q' | 's' | 'S' => 4,
		'c' | 'C' => 6,
		'a' | 'A' => 7,
		_ => 0,
	}
}

/// Parser state threaded across chunks: the segments emitted so far, the pen's
/// current point, and the control points available for smooth-curve reflection.
/// The reflection state only survives while the immediately preceding segment
/// is of the matching curve kind.
#[derive(Default)]
struct Parser {
	segments: Vec<Segment>,
	current_point: DVec2,
	last_quadratic_control: Option<DVec2>,
	last_cubic_control: Option<DVec2>,
}

impl Parser {
	/// Consume one command chunk, emitting a segment per full argument group.
	fn parse_chunk(&mut self, command: char, numbers: &[f64]) {
		if command == 'z' || command == 'Z' {
			self.emit(Segment::Empty { point: self.current_point });
			if !numbers.is_empty() {
				warn!("dropping {} argument(s) following a close command", numbers.len());
			}
			return;
		}

		let mut command = command;
		let mut remaining = numbers;
		loop {
			let arity = command_arity(command);
			if remaining.len() < arity {
				if !remaining.is_empty() {
					warn!("dropping {} trailing argument(s) of a '{command}' command", remaining.len());
				}
				return;
			}
			let (arguments, rest) = remaining.split_at(arity);
			remaining = rest;

			let relative = command.is_ascii_lowercase();
			match command.to_ascii_uppercase() {
				'M' => {
					self.emit(Segment::Move {
						point: self.resolve(relative, arguments[0], arguments[1]),
					});
					// Coordinate pairs after the first are implicit line-to's.
					command = if relative { 'l' } else { 'L' };
				}
				'L' => {
					let end = self.resolve(relative, arguments[0], arguments[1]);
					self.emit(Segment::Line(Line::new(self.current_point, end)));
				}
				'H' => {
					let end = if relative {
						self.current_point + DVec2::new(arguments[0], 0.)
					} else {
						DVec2::new(arguments[0], self.current_point.y)
					};
					self.emit(Segment::Line(Line::new(self.current_point, end)));
				}
				'V' => {
					let end = if relative {
						self.current_point + DVec2::new(0., arguments[0])
					} else {
						DVec2::new(self.current_point.x, arguments[0])
					};
					self.emit(Segment::Line(Line::new(self.current_point, end)));
				}
				'Q' => {
					let control = self.resolve(relative, arguments[0], arguments[1]);
					let end = self.resolve(relative, arguments[2], arguments[3]);
					self.emit(Segment::Quadratic(QuadraticBezier::new(self.current_point, control, end)));
				}
				'T' => {
					let control = self.reflected_control(self.last_quadratic_control);
					let end = self.resolve(relative, arguments[0], arguments[1]);
					self.emit(Segment::Quadratic(QuadraticBezier::new(self.current_point, control, end)));
				}
				'C' => {
					let control1 = self.resolve(relative, arguments[0], arguments[1]);
					let control2 = self.resolve(relative, arguments[2], arguments[3]);
					let end = self.resolve(relative, arguments[4], arguments[5]);
					self.emit(Segment::Cubic(CubicBezier::new(self.current_point, control1, control2, end)));
				}
				'S' => {
					let control1 = self.reflected_control(self.last_cubic_control);
					let control2 = self.resolve(relative, arguments[0], arguments[1]);
					let end = self.resolve(relative, arguments[2], arguments[3]);
					self.emit(Segment::Cubic(CubicBezier::new(self.current_point, control1, control2, end)));
				}
				'A' => {
					let radii = DVec2::new(arguments[0], arguments[1]);
					let end = self.resolve(relative, arguments[5], arguments[6]);
					self.emit_arc(end, radii, arguments[2], arguments[3] != 0., arguments[4] != 0.);
				}
				_ => return,
			}

			if remaining.is_empty() {
				return;
			}
		}
	}

	/// Push a segment, advancing the current point to its end and refreshing
	/// the smooth-curve reflection state.
	fn emit(&mut self, segment: Segment) {
		self.last_quadratic_control = match &segment {
			Segment::Quadratic(quadratic) => Some(quadratic.control()),
			_ => None,
		};
		self.last_cubic_control = match &segment {
			Segment::Cubic(cubic) => Some(cubic.control2()),
			_ => None,
		};
		self.current_point = segment.end();
		self.segments.push(segment);
	}

	/// Turn a coordinate pair into an absolute point, offsetting relative
	/// coordinates from the current point.
	fn resolve(&self, relative: bool, x: f64, y: f64) -> DVec2 {
		if relative {
			self.current_point + DVec2::new(x, y)
		} else {
			DVec2::new(x, y)
		}
	}

	/// The control point of a smooth curve command: the previous curve's final
	/// control point reflected through the current point. Without a preceding
	/// curve of the matching kind there is nothing to reflect, and the current
	/// point itself is used.
	fn reflected_control(&self, previous_control: Option<DVec2>) -> DVec2 {
		match previous_control {
			Some(control) => 2. * self.current_point - control,
			None => self.current_point,
		}
	}

	/// Emit an elliptical arc from its endpoint parameterization (the radii,
	/// x-axis rotation in degrees, the two flags, and the endpoint), converting
	/// to the center parameterization the segment stores. Radii of zero cannot
	/// define an ellipse and degenerate to a straight line, as do coincident
	/// endpoints, which select no arc at all.
	fn emit_arc(&mut self, end: DVec2, radii: DVec2, x_axis_rotation_degrees: f64, large_arc: bool, sweep: bool) {
		let start = self.current_point;

		if radii.x.abs() < f64::EPSILON || radii.y.abs() < f64::EPSILON {
			self.emit(Segment::Line(Line::new(start, end)));
			return;
		}

		let x_axis_rotation = x_axis_rotation_degrees * PI / 180.;
		let (sin_phi, cos_phi) = x_axis_rotation.sin_cos();
		let mut rx = radii.x.abs();
		let mut ry = radii.y.abs();

		// Transform into the frame centered on the chord midpoint with the
		// coordinate axes aligned to the ellipse axes.
		let midpoint = (start - end) / 2.;
		let x1_prime = cos_phi * midpoint.x + sin_phi * midpoint.y;
		let y1_prime = -sin_phi * midpoint.x + cos_phi * midpoint.y;

		// Grow undersized radii until the ellipse can reach both endpoints.
		let lambda = (x1_prime / rx).powi(2) + (y1_prime / ry).powi(2);
		if lambda > 1. {
			rx *= lambda.sqrt();
			ry *= lambda.sqrt();
		}

		let d = (rx * y1_prime).powi(2) + (ry * x1_prime).powi(2);
		if d == 0. {
			self.emit(Segment::Line(Line::new(start, end)));
			return;
		}
		let mut k = ((rx * ry).powi(2) / d - 1.).abs().sqrt();
		if sweep == large_arc {
			k = -k;
		}
		let center_prime = DVec2::new(k * rx * y1_prime / ry, -k * ry * x1_prime / rx);

		let center = DVec2::new(
			cos_phi * center_prime.x - sin_phi * center_prime.y + (start.x + end.x) / 2.,
			sin_phi * center_prime.x + cos_phi * center_prime.y + (start.y + end.y) / 2.,
		);

		// The start angle and sweep come from the endpoint vectors in the
		// radius-normalized ellipse frame.
		let to_start = DVec2::new((x1_prime - center_prime.x) / rx, (y1_prime - center_prime.y) / ry);
		let to_end = DVec2::new((-x1_prime - center_prime.x) / rx, (-y1_prime - center_prime.y) / ry);
		let start_angle = angle_between_points(DVec2::ZERO, to_start);
		let mut sweep_angle = angle_between_points(DVec2::ZERO, to_end) - start_angle;
		if sweep && sweep_angle < 0. {
			sweep_angle += 2. * PI;
		} else if !sweep && sweep_angle > 0. {
			sweep_angle -= 2. * PI;
		}

		self.emit(Segment::Arc(EllipticalArc::new(start, end, center, DVec2::new(rx, ry), start_angle, sweep_angle, x_axis_rotation)));
	}
}
