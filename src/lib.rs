#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::*;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  ClockWiseViolation,
  /// All points are colinear and no valid triangulation exists.
  CoLinearViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::CoLinearViolation => write!(
        f,
        "Two or more points are colinear and no valid solution exists"
      ),
    }
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate scalar for Delaunay triangulations.
///
/// The three predicates carry the numeric heavy lifting: orientation of a
/// point relative to a directed line, position of a point relative to a
/// circumcircle, and barycentric coordinates for the point-location
/// tie-break. Floating-point types route the first two through exact
/// adaptive-precision predicates; `BigInt`/`BigRational` evaluate the
/// determinants exactly.
pub trait TriangulationScalar: std::fmt::Debug + PartialEq + TotalOrd + Clone {
  fn from_constant(val: i8) -> Self;
  /// Position of `r` relative to the directed line `p -> q`.
  /// `Greater` means `r` lies to the left (counterclockwise).
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Position of `q` relative to the circumcircle of the counterclockwise
  /// triangle `(a, b, c)`. `Greater` means strictly inside.
  fn cmp_circle(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], q: &[Self; 2]) -> Ordering;
  /// Barycentric coordinates of `q` in the triangle `(a, b, c)`, or `None`
  /// if the triangle is degenerate.
  fn barycentric(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], q: &[Self; 2]) -> Option<[f64; 3]>;
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl TriangulationScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let slope1 = (&r[1] - &q[1]) * (&q[0] - &p[0]);
          let slope2 = (&q[1] - &p[1]) * (&r[0] - &q[0]);
          slope1.cmp(&slope2)
        }
        fn cmp_circle(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], q: &[Self; 2]) -> Ordering {
          let ax = &a[0] - &q[0];
          let ay = &a[1] - &q[1];
          let bx = &b[0] - &q[0];
          let by = &b[1] - &q[1];
          let cx = &c[0] - &q[0];
          let cy = &c[1] - &q[1];
          let a2 = &ax * &ax + &ay * &ay;
          let b2 = &bx * &bx + &by * &by;
          let c2 = &cx * &cx + &cy * &cy;
          let det = &ax * (&by * &c2 - &b2 * &cy) - &ay * (&bx * &c2 - &b2 * &cx)
            + &a2 * (&bx * &cy - &by * &cx);
          det.cmp(&Self::from_constant(0))
        }
        fn barycentric(
          a: &[Self; 2],
          b: &[Self; 2],
          c: &[Self; 2],
          q: &[Self; 2],
        ) -> Option<[f64; 3]> {
          let denom = (&b[0] - &a[0]) * (&c[1] - &a[1]) - (&b[1] - &a[1]) * (&c[0] - &a[0]);
          if denom.is_zero() {
            return None;
          }
          let wa = (&b[0] - &q[0]) * (&c[1] - &q[1]) - (&b[1] - &q[1]) * (&c[0] - &q[0]);
          let wb = (&c[0] - &q[0]) * (&a[1] - &q[1]) - (&c[1] - &q[1]) * (&a[0] - &q[0]);
          let wc = (&a[0] - &q[0]) * (&b[1] - &q[1]) - (&a[1] - &q[1]) * (&b[0] - &q[0]);
          let denom = denom.to_f64()?;
          Some([
            wa.to_f64()? / denom,
            wb.to_f64()? / denom,
            wc.to_f64()? / denom,
          ])
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl TriangulationScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }
        // Exact despite the floating-point input; adaptive-precision
        // evaluation is handled by `geometry_predicates`.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0].into(), p[1].into()],
            [q[0].into(), q[1].into()],
            [r[0].into(), r[1].into()],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
        fn cmp_circle(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], q: &[Self; 2]) -> Ordering {
          let det = geometry_predicates::predicates::incircle(
            [a[0].into(), a[1].into()],
            [b[0].into(), b[1].into()],
            [c[0].into(), c[1].into()],
            [q[0].into(), q[1].into()],
          );
          if det > 0.0 {
            Ordering::Greater
          } else if det < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
        fn barycentric(
          a: &[Self; 2],
          b: &[Self; 2],
          c: &[Self; 2],
          q: &[Self; 2],
        ) -> Option<[f64; 3]> {
          float_barycentric(
            [a[0].into(), a[1].into()],
            [b[0].into(), b[1].into()],
            [c[0].into(), c[1].into()],
            [q[0].into(), q[1].into()],
          )
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl TriangulationScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0].into_inner().into(), p[1].into_inner().into()],
            [q[0].into_inner().into(), q[1].into_inner().into()],
            [r[0].into_inner().into(), r[1].into_inner().into()],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
        fn cmp_circle(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], q: &[Self; 2]) -> Ordering {
          let det = geometry_predicates::predicates::incircle(
            [a[0].into_inner().into(), a[1].into_inner().into()],
            [b[0].into_inner().into(), b[1].into_inner().into()],
            [c[0].into_inner().into(), c[1].into_inner().into()],
            [q[0].into_inner().into(), q[1].into_inner().into()],
          );
          if det > 0.0 {
            Ordering::Greater
          } else if det < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
        fn barycentric(
          a: &[Self; 2],
          b: &[Self; 2],
          c: &[Self; 2],
          q: &[Self; 2],
        ) -> Option<[f64; 3]> {
          float_barycentric(
            [a[0].into_inner().into(), a[1].into_inner().into()],
            [b[0].into_inner().into(), b[1].into_inner().into()],
            [c[0].into_inner().into(), c[1].into_inner().into()],
            [q[0].into_inner().into(), q[1].into_inner().into()],
          )
        }
      }
    )*
  };
}

fn float_barycentric(a: [f64; 2], b: [f64; 2], c: [f64; 2], q: [f64; 2]) -> Option<[f64; 3]> {
  let denom = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
  if denom == 0.0 {
    return None;
  }
  let wa = ((b[0] - q[0]) * (c[1] - q[1]) - (b[1] - q[1]) * (c[0] - q[0])) / denom;
  let wb = ((c[0] - q[0]) * (a[1] - q[1]) - (c[1] - q[1]) * (a[0] - q[0])) / denom;
  let wc = ((a[0] - q[0]) * (b[1] - q[1]) - (a[1] - q[1]) * (b[0] - q[0])) / denom;
  Some([wa, wb, wc])
}

arbitrary_precision!(num_bigint::BigInt);
arbitrary_precision!(num_rational::BigRational);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
wrapped_floating_precision!(ordered_float::NotNan<f32>);
wrapped_floating_precision!(ordered_float::NotNan<f64>);
floating_precision!(f32);
floating_precision!(f64);

#[cfg(test)]
pub mod testing;
