//! Golub-Reinsch Singular Value Decomposition.
//!
//! Decomposes a tall or square matrix A ∈ ℝᵐˣⁿ (m ≥ n) as
//!
//! ```text
//! A = U Σ Vᵀ
//! ```
//!
//! where:
//! * U ∈ ℝᵐˣⁿ has orthonormal columns (left singular vectors)
//! * Σ = diag(w) with w ∈ ℝⁿ, w ≥ 0 (singular values)
//! * V ∈ ℝⁿˣⁿ is orthogonal (right singular vectors)
//!
//! # Implementation Details
//!
//! * Householder reduction to bidiagonal form, with per row and column scaling
//!   to avoid overflow on badly scaled inputs.
//! * Backward accumulation of the right and left hand transformations.
//! * Diagonalization with implicit shifted QR sweeps (Givens chase), capped to
//!   a fixed number of sweeps per singular value.
//!
//! The singular values are **not** sorted. Use [`Svd3::sorted`] when an ordered
//! decomposition is needed, e.g. for rank estimation.
//!
//! # Example
//!
//! ```
//! use planar_linalg::svd::svd_decompose;
//!
//! let a = faer::mat![[3.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
//! let svd = svd_decompose(&a).unwrap();
//! assert_eq!(svd.singular_values.len(), 3);
//! assert_eq!(svd.u.nrows(), 4);
//! ```
//!
//! # References
//!
//! * Golub and Reinsch (1970). "Singular value decomposition and least squares
//!   solutions." Numerische Mathematik 14, 403-420.

use faer::Mat;

use crate::{LinalgError, Mat3F32, Vec3F32};

/// Default number of QR sweeps allowed per singular value.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Convergence criteria of the QR diagonalization.
#[derive(Debug, Clone)]
pub struct SvdCriteria {
    /// Maximum number of QR sweeps per singular value.
    pub max_iterations: usize,
}

impl Default for SvdCriteria {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Output of [`svd_decompose`] for an `m x n` input.
#[derive(Debug, Clone)]
pub struct SvdOutput {
    /// The `m x n` matrix of left singular vectors.
    pub u: Mat<f64>,
    /// The `n` singular values, non-negative and unsorted.
    pub singular_values: Vec<f64>,
    /// The `n x n` matrix of right singular vectors.
    pub v: Mat<f64>,
}

/// Decomposition of a 3x3 single precision matrix.
#[derive(Debug, Clone)]
pub struct Svd3 {
    /// The matrix of left singular vectors.
    u: Mat3F32,

    /// The singular values.
    singular_values: Vec3F32,

    /// The matrix of right singular vectors.
    v: Mat3F32,
}

impl Svd3 {
    pub(crate) fn from_output(output: &SvdOutput) -> Self {
        let to_mat3 = |m: &Mat<f64>| {
            Mat3F32::from_rows_array(&std::array::from_fn(|k| m[(k / 3, k % 3)] as f32))
        };
        let u = to_mat3(&output.u);
        let v = to_mat3(&output.v);
        let s = &output.singular_values;
        Self {
            u,
            singular_values: Vec3F32::new(s[0] as f32, s[1] as f32, s[2] as f32),
            v,
        }
    }

    /// Get the left singular vectors matrix.
    #[inline]
    pub fn u(&self) -> &Mat3F32 {
        &self.u
    }

    /// Get the singular values.
    #[inline]
    pub fn singular_values(&self) -> Vec3F32 {
        self.singular_values
    }

    /// Get the diagonal matrix of singular values.
    #[inline]
    pub fn s(&self) -> Mat3F32 {
        Mat3F32::from_diagonal(self.singular_values)
    }

    /// Get the right singular vectors matrix.
    #[inline]
    pub fn v(&self) -> &Mat3F32 {
        &self.v
    }

    /// Returns the decomposition with singular values in descending order.
    ///
    /// The columns of U and V are permuted accordingly, so the product is unchanged.
    pub fn sorted(&self) -> Self {
        let s = self.singular_values.to_array();
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| s[b].total_cmp(&s[a]));

        let u_cols = self.u.0.to_cols_array_2d();
        let v_cols = self.v.0.to_cols_array_2d();
        let permute = |cols: &[[f32; 3]; 3]| {
            Mat3F32(glam::Mat3::from_cols_array_2d(&[
                cols[order[0]],
                cols[order[1]],
                cols[order[2]],
            ]))
        };

        Self {
            u: permute(&u_cols),
            singular_values: Vec3F32::new(s[order[0]], s[order[1]], s[order[2]]),
            v: permute(&v_cols),
        }
    }
}

/// Computes `sqrt(a² + b²)` without destructive underflow or overflow.
pub fn hypot(a: f64, b: f64) -> f64 {
    let abs_a = a.abs();
    let abs_b = b.abs();
    if abs_a > abs_b {
        let ratio = abs_b / abs_a;
        abs_a * (1.0 + ratio * ratio).sqrt()
    } else if abs_b > 0.0 {
        let ratio = abs_a / abs_b;
        abs_b * (1.0 + ratio * ratio).sqrt()
    } else {
        0.0
    }
}

/// Magnitude of `a` with the sign of `b`, where `b == 0` counts as positive.
#[inline]
fn sign(a: f64, b: f64) -> f64 {
    if b < 0.0 {
        -a.abs()
    } else {
        a.abs()
    }
}

/// Computes the SVD of `a` with the default convergence criteria.
///
/// See [`svd_decompose_with`].
pub fn svd_decompose(a: &Mat<f64>) -> Result<SvdOutput, LinalgError> {
    svd_decompose_with(a, &SvdCriteria::default())
}

/// Computes the SVD `A = U * diag(w) * Vᵀ` of a matrix with at least as many rows as columns.
///
/// # Arguments
///
/// * `a` - The `m x n` input matrix, left untouched.
/// * `criteria` - Convergence criteria of the QR diagonalization.
///
/// # Errors
///
/// * [`LinalgError::InvalidDimension`] if `m < n`. Transpose wide matrices before calling.
/// * [`LinalgError::NoConvergence`] if a singular value is not diagonalized within
///   `criteria.max_iterations` iterations.
pub fn svd_decompose_with(
    a: &Mat<f64>,
    criteria: &SvdCriteria,
) -> Result<SvdOutput, LinalgError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(LinalgError::InvalidDimension { rows: m, cols: n });
    }

    // NOTE: u starts as a copy of the input and is overwritten in place
    let mut u = a.clone();
    let mut w = vec![0.0f64; n];
    let mut v = Mat::<f64>::zeros(n, n);
    let mut rv1 = vec![0.0f64; n];

    // 1. Householder reduction to bidiagonal form
    let mut g = 0.0f64;
    let mut scale = 0.0f64;
    let mut anorm = 0.0f64;
    let mut l = 0usize;

    for i in 0..n {
        l = i + 1;
        rv1[i] = scale * g;
        g = 0.0;
        scale = 0.0;

        // left transformation, zeroes the column below the diagonal
        for k in i..m {
            scale += u[(k, i)].abs();
        }
        if scale != 0.0 {
            let mut s = 0.0;
            for k in i..m {
                u[(k, i)] /= scale;
                s += u[(k, i)] * u[(k, i)];
            }
            let f = u[(i, i)];
            g = -sign(s.sqrt(), f);
            let h = f * g - s;
            u[(i, i)] = f - g;
            for j in l..n {
                let mut s = 0.0;
                for k in i..m {
                    s += u[(k, i)] * u[(k, j)];
                }
                let f = s / h;
                for k in i..m {
                    u[(k, j)] += f * u[(k, i)];
                }
            }
            for k in i..m {
                u[(k, i)] *= scale;
            }
        }
        w[i] = scale * g;

        // right transformation, zeroes the row right of the superdiagonal
        g = 0.0;
        scale = 0.0;
        if i != n - 1 {
            for k in l..n {
                scale += u[(i, k)].abs();
            }
            if scale != 0.0 {
                let mut s = 0.0;
                for k in l..n {
                    u[(i, k)] /= scale;
                    s += u[(i, k)] * u[(i, k)];
                }
                let f = u[(i, l)];
                g = -sign(s.sqrt(), f);
                let h = f * g - s;
                u[(i, l)] = f - g;
                for k in l..n {
                    rv1[k] = u[(i, k)] / h;
                }
                for j in l..m {
                    let mut s = 0.0;
                    for k in l..n {
                        s += u[(j, k)] * u[(i, k)];
                    }
                    for k in l..n {
                        u[(j, k)] += s * rv1[k];
                    }
                }
                for k in l..n {
                    u[(i, k)] *= scale;
                }
            }
        }
        anorm = anorm.max(w[i].abs() + rv1[i].abs());
    }

    // 2. Accumulation of right-hand transformations
    for i in (0..n).rev() {
        if i < n - 1 {
            if g != 0.0 {
                // double division to avoid possible underflow
                for j in l..n {
                    v[(j, i)] = (u[(i, j)] / u[(i, l)]) / g;
                }
                for j in l..n {
                    let mut s = 0.0;
                    for k in l..n {
                        s += u[(i, k)] * v[(k, j)];
                    }
                    for k in l..n {
                        v[(k, j)] += s * v[(k, i)];
                    }
                }
            }
            for j in l..n {
                v[(i, j)] = 0.0;
                v[(j, i)] = 0.0;
            }
        }
        v[(i, i)] = 1.0;
        g = rv1[i];
        l = i;
    }

    // 3. Accumulation of left-hand transformations
    for i in (0..n).rev() {
        let l = i + 1;
        for j in l..n {
            u[(i, j)] = 0.0;
        }
        let g = w[i];
        if g != 0.0 {
            let g = 1.0 / g;
            for j in l..n {
                let mut s = 0.0;
                for k in l..m {
                    s += u[(k, i)] * u[(k, j)];
                }
                let f = (s / u[(i, i)]) * g;
                for k in i..m {
                    u[(k, j)] += f * u[(k, i)];
                }
            }
            for j in i..m {
                u[(j, i)] *= g;
            }
        } else {
            for j in i..m {
                u[(j, i)] = 0.0;
            }
        }
        u[(i, i)] += 1.0;
    }

    // 4. Diagonalization of the bidiagonal form
    for k in (0..n).rev() {
        let mut its = 1;
        loop {
            // test for splitting, rv1[0] is always zero
            let mut l = k;
            let mut cancel = true;
            loop {
                if l == 0 || rv1[l].abs() + anorm == anorm {
                    cancel = false;
                    break;
                }
                if w[l - 1].abs() + anorm == anorm {
                    break;
                }
                l -= 1;
            }

            // cancellation of rv1[l] when w[l - 1] is negligible
            if cancel {
                let nm = l - 1;
                let mut c = 0.0;
                let mut s = 1.0;
                for i in l..=k {
                    let f = s * rv1[i];
                    rv1[i] *= c;
                    if f.abs() + anorm == anorm {
                        break;
                    }
                    let g = w[i];
                    let h = hypot(f, g);
                    w[i] = h;
                    let h = 1.0 / h;
                    c = g * h;
                    s = -f * h;
                    for j in 0..m {
                        let y = u[(j, nm)];
                        let z = u[(j, i)];
                        u[(j, nm)] = y * c + z * s;
                        u[(j, i)] = z * c - y * s;
                    }
                }
            }

            let z = w[k];
            if l == k {
                // convergence, make the singular value non-negative
                if z < 0.0 {
                    w[k] = -z;
                    for j in 0..n {
                        v[(j, k)] = -v[(j, k)];
                    }
                }
                log::trace!("singular value {} converged after {} sweeps", k, its);
                break;
            }

            if its >= criteria.max_iterations {
                log::debug!(
                    "no convergence for singular value {} in {} sweeps",
                    k,
                    its
                );
                return Err(LinalgError::NoConvergence {
                    index: k,
                    iterations: its,
                });
            }

            // shift from the bottom 2x2 minor
            let mut x = w[l];
            let nm = k - 1;
            let mut y = w[nm];
            let mut g = rv1[nm];
            let mut h = rv1[k];
            let mut f = ((y - z) * (y + z) + (g - h) * (g + h)) / (2.0 * h * y);
            g = hypot(f, 1.0);
            f = ((x - z) * (x + z) + h * ((y / (f + sign(g, f))) - h)) / x;

            // next QR transformation
            let mut c = 1.0;
            let mut s = 1.0;
            for j in l..=nm {
                let i = j + 1;
                g = rv1[i];
                y = w[i];
                h = s * g;
                g *= c;
                let mut z = hypot(f, h);
                rv1[j] = z;
                c = f / z;
                s = h / z;
                f = x * c + g * s;
                g = g * c - x * s;
                h = y * s;
                y *= c;
                for jj in 0..n {
                    let vx = v[(jj, j)];
                    let vz = v[(jj, i)];
                    v[(jj, j)] = vx * c + vz * s;
                    v[(jj, i)] = vz * c - vx * s;
                }
                z = hypot(f, h);
                w[j] = z;
                // rotation can be arbitrary if z is zero
                if z != 0.0 {
                    z = 1.0 / z;
                    c = f * z;
                    s = h * z;
                }
                f = c * g + s * y;
                x = c * y - s * g;
                for jj in 0..m {
                    let uy = u[(jj, j)];
                    let uz = u[(jj, i)];
                    u[(jj, j)] = uy * c + uz * s;
                    u[(jj, i)] = uz * c - uy * s;
                }
            }
            rv1[l] = 0.0;
            rv1[k] = f;
            w[k] = x;
            its += 1;
        }
    }

    Ok(SvdOutput {
        u,
        singular_values: w,
        v,
    })
}
