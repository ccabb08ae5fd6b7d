//! Connector paths between node boxes, as SVG path data.
//!
//! Connectors leave the source's right-center edge and enter the target's
//! left-center edge. A small per-case-study table of `(from, to)` overrides
//! swaps in different routing for edges where the default S-curve would cross
//! other branches.

use super::model::GraphModel;
use super::types::{Footprint, NodeId, Position};

/// Corner radius of a rounded elbow, before clamping to the available gap.
pub const ELBOW_RADIUS: f64 = 25.0;
/// Share of the horizontal gap covered before the elbow turns.
pub const ELBOW_RUN: f64 = 0.25;
/// Height of the quadratic arc's control point above the start.
pub const ARC_LIFT: f64 = 30.0;

/// How a single connector is routed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryStrategy {
	/// Symmetric S-curve, control points at the horizontal midpoint.
	CubicBezier,
	/// Vertical merge between horizontal centers, no curve.
	Straight,
	/// One control point at the midpoint, `lift` units above the start.
	QuadraticBezier {
		/// Control point offset above the start, in layout units.
		lift: f64,
	},
	/// Horizontal run, rounded turn, vertical run, rounded turn, horizontal run.
	///
	/// The radius shrinks to fit when the vertical or remaining horizontal gap
	/// is too small for two full corners.
	RoundedElbow {
		/// Corner radius.
		radius: f64,
		/// Share of the horizontal gap covered before the first corner.
		run: f64,
	},
}

impl GeometryStrategy {
	/// Arc with the standard lift.
	pub const ARC: Self = GeometryStrategy::QuadraticBezier { lift: ARC_LIFT };
	/// Elbow with the standard radius and run.
	pub const ELBOW: Self = GeometryStrategy::RoundedElbow {
		radius: ELBOW_RADIUS,
		run: ELBOW_RUN,
	};
}

/// Routing for one directed connection, replacing the default curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryOverride {
	/// Source node id.
	pub from: NodeId,
	/// Target node id.
	pub to: NodeId,
	/// Routing used for this connection.
	pub strategy: GeometryStrategy,
}

impl GeometryOverride {
	/// Entry for `from -> to`.
	pub const fn new(from: NodeId, to: NodeId, strategy: GeometryStrategy) -> Self {
		Self { from, to, strategy }
	}
}

/// Strategy for the directed pair `from -> to`; cubic when no entry matches.
pub fn strategy_for(overrides: &[GeometryOverride], from: &str, to: &str) -> GeometryStrategy {
	overrides
		.iter()
		.find(|o| o.from == from && o.to == to)
		.map_or(GeometryStrategy::CubicBezier, |o| o.strategy)
}

/// Path data for the connection `from -> to`, or an empty string when either
/// endpoint is not declared.
pub fn connection_path(model: &GraphModel, from: &str, to: &str) -> String {
	let (Some(source), Some(target)) = (model.node(from), model.node(to)) else {
		return String::new();
	};
	let strategy = strategy_for(model.geometry_overrides(), from, to);
	connector(strategy, source.position, target.position, model.footprint())
}

/// Path data between two node boxes at `from` and `to`.
pub fn connector(
	strategy: GeometryStrategy,
	from: Position,
	to: Position,
	footprint: Footprint,
) -> String {
	let (w, h) = (footprint.width, footprint.height);
	let mut d = PathData::new();

	if strategy == GeometryStrategy::Straight {
		let (x1, x2) = (from.x + w / 2.0, to.x + w / 2.0);
		// leave through whichever horizontal edge faces the target
		let (y1, y2) = if to.y < from.y {
			(from.y, to.y + h)
		} else {
			(from.y + h, to.y)
		};
		d.move_to(x1, y1);
		d.line_to(x2, y2);
		return d.finish();
	}

	let (x1, y1) = (from.x + w, from.y + h / 2.0);
	let (x2, y2) = (to.x, to.y + h / 2.0);
	let (dx, dy) = (x2 - x1, y2 - y1);
	d.move_to(x1, y1);

	match strategy {
		GeometryStrategy::QuadraticBezier { lift } => {
			d.quad_to((x1 + x2) / 2.0, y1 - lift, x2, y2);
		}
		GeometryStrategy::RoundedElbow { radius, run } if dy != 0.0 => {
			let turn = x1 + dx * run;
			// two corners must fit in both the vertical gap and the remaining run
			let r = radius.min(dy.abs() / 2.0).min((x2 - turn) / 2.0).max(0.0);
			let dir = dy.signum();
			d.line_to(turn, y1);
			d.quad_to(turn + r, y1, turn + r, y1 + dir * r);
			d.line_to(turn + r, y2 - dir * r);
			d.quad_to(turn + r, y2, turn + r * 2.0, y2);
			d.line_to(x2, y2);
		}
		_ => {
			let cx = x1 + dx * 0.5;
			d.cubic_to(cx, y1, cx, y2, x2, y2);
		}
	}
	d.finish()
}

/// Accumulates `M x y C a b, c d, e f`-style path data with JS number formatting.
struct PathData {
	out: String,
	buf: ryu_js::Buffer,
}

impl PathData {
	fn new() -> Self {
		Self {
			out: String::new(),
			buf: ryu_js::Buffer::new(),
		}
	}

	fn command(&mut self, c: char) {
		if !self.out.is_empty() {
			self.out.push(' ');
		}
		self.out.push(c);
	}

	fn number(&mut self, mut v: f64) {
		if !v.is_finite() {
			self.out.push('0');
			return;
		}
		if v == 0.0 {
			v = 0.0;
		}
		let s = self.buf.format_finite(v);
		self.out.push_str(s);
	}

	fn point(&mut self, x: f64, y: f64) {
		self.out.push(' ');
		self.number(x);
		self.out.push(' ');
		self.number(y);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.command('M');
		self.point(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.command('L');
		self.point(x, y);
	}

	fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
		self.command('Q');
		self.point(cx, cy);
		self.out.push(',');
		self.point(x, y);
	}

	fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
		self.command('C');
		self.point(c1x, c1y);
		self.out.push(',');
		self.point(c2x, c2y);
		self.out.push(',');
		self.point(x, y);
	}

	fn finish(self) -> String {
		self.out
	}
}
