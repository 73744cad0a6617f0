//! 3x3 matrix (single precision).

use crate::svd::{self, Svd3};
use crate::{LinalgError, Vec3F32};
use std::ops::{Deref, DerefMut};

/// 3x3 matrix (single precision).
///
/// This is a newtype wrapper around `glam::Mat3`. Elements are addressed by
/// `(row, col)`, independently of the column-major storage of the backend.
/// Every operation returns a new value and never mutates its operands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Mat3F32(pub glam::Mat3);

impl Mat3F32 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self(glam::Mat3::IDENTITY);

    /// All zeros matrix.
    pub const ZERO: Self = Self(glam::Mat3::ZERO);

    /// Create a new matrix from row vectors.
    #[inline]
    pub fn from_rows(row0: Vec3F32, row1: Vec3F32, row2: Vec3F32) -> Self {
        Self::from_cols(row0, row1, row2).transpose()
    }

    /// Create a new matrix from column vectors.
    #[inline]
    pub fn from_cols(x_axis: Vec3F32, y_axis: Vec3F32, z_axis: Vec3F32) -> Self {
        Self(glam::Mat3::from_cols(
            x_axis.into(),
            y_axis.into(),
            z_axis.into(),
        ))
    }

    /// Create a diagonal matrix with the given vector on its diagonal.
    #[inline]
    pub fn from_diagonal(diagonal: Vec3F32) -> Self {
        Self(glam::Mat3::from_diagonal(diagonal.into()))
    }

    /// Create a new matrix from a row-major array.
    #[inline]
    pub fn from_rows_array(arr: &[f32; 9]) -> Self {
        Self(glam::Mat3::from_cols_array(arr).transpose())
    }

    /// Create a new matrix from a column-major array.
    #[inline]
    pub fn from_cols_array(arr: &[f32; 9]) -> Self {
        Self(glam::Mat3::from_cols_array(arr))
    }

    /// Returns all the elements of the matrix in row-major order.
    #[inline]
    pub fn to_rows_array(&self) -> [f32; 9] {
        self.0.transpose().to_cols_array()
    }

    /// Rotation matrix around the X axis.
    ///
    /// # Arguments
    ///
    /// * `radians` - Rotation angle in radians.
    #[inline]
    pub fn from_rotation_x(radians: f32) -> Self {
        Self(glam::Mat3::from_rotation_x(radians))
    }

    /// Rotation matrix around the Y axis.
    #[inline]
    pub fn from_rotation_y(radians: f32) -> Self {
        Self(glam::Mat3::from_rotation_y(radians))
    }

    /// Rotation matrix around the Z axis.
    #[inline]
    pub fn from_rotation_z(radians: f32) -> Self {
        Self(glam::Mat3::from_rotation_z(radians))
    }

    /// Rotation matrix composed as `Ry(yaw) * Rx(pitch) * Rz(roll)`.
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::from_rotation_y(yaw) * Self::from_rotation_x(pitch) * Self::from_rotation_z(roll)
    }

    /// Extracts the `(yaw, pitch, roll)` angles of a rotation built with
    /// [`Mat3F32::from_yaw_pitch_roll`].
    pub fn to_yaw_pitch_roll(&self) -> (f32, f32, f32) {
        let [_, _, a02, a10, a11, a12, _, _, a22] = self.to_rows_array();
        let yaw = a02.atan2(a22);
        let pitch = (-a12).asin();
        let roll = a10.atan2(a11);
        (yaw, pitch, roll)
    }

    /// Element at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, LinalgError> {
        let row = self.row(row)?;
        match col {
            0 => Ok(row.x),
            1 => Ok(row.y),
            2 => Ok(row.z),
            _ => Err(LinalgError::InvalidIndex(col)),
        }
    }

    /// Row of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidIndex`] if `index` is not in `0..3`.
    pub fn row(&self, index: usize) -> Result<Vec3F32, LinalgError> {
        if index > 2 {
            return Err(LinalgError::InvalidIndex(index));
        }
        Ok(Vec3F32::from(self.0.row(index)))
    }

    /// Column of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidIndex`] if `index` is not in `0..3`.
    pub fn col(&self, index: usize) -> Result<Vec3F32, LinalgError> {
        if index > 2 {
            return Err(LinalgError::InvalidIndex(index));
        }
        Ok(Vec3F32::from(self.0.col(index)))
    }

    /// Matrix product `self * rhs`.
    #[inline]
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    /// Matrix-vector product `self * rhs`.
    #[inline]
    pub fn mul_vec3(&self, rhs: Vec3F32) -> Vec3F32 {
        Vec3F32::from(self.0 * glam::Vec3::from(rhs))
    }

    /// Multiplies every element by `factor`.
    #[inline]
    pub fn mul_scalar(&self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Elementwise sum.
    #[inline]
    pub fn add_mat(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// Elementwise difference.
    #[inline]
    pub fn sub_mat(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    /// Adds `value` to every element.
    pub fn add_scalar(&self, value: f32) -> Self {
        let splat = glam::Vec3::splat(value);
        Self(glam::Mat3::from_cols(
            self.0.x_axis + splat,
            self.0.y_axis + splat,
            self.0.z_axis + splat,
        ))
    }

    /// Transpose of the matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Determinant computed with the cofactor expansion formula.
    pub fn determinant(&self) -> f32 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.to_rows_array();
        a00 * a11 * a22 + a01 * a12 * a20 + a02 * a10 * a21
            - a00 * a12 * a21
            - a01 * a10 * a22
            - a02 * a11 * a20
    }

    /// Adjugate matrix (transpose of the signed cofactor matrix).
    ///
    /// Satisfies `A * adj(A) == det(A) * I`.
    pub fn adjugate(&self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.to_rows_array();
        Self::from_rows_array(&[
            a11 * a22 - a12 * a21,
            -(a01 * a22 - a02 * a21),
            a01 * a12 - a02 * a11,
            -(a10 * a22 - a12 * a20),
            a00 * a22 - a02 * a20,
            -(a00 * a12 - a02 * a10),
            a10 * a21 - a11 * a20,
            -(a00 * a21 - a01 * a20),
            a00 * a11 - a01 * a10,
        ])
    }

    /// Inverse of the matrix computed as `adj(A) / det(A)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] when the determinant is exactly zero.
    /// Nearly singular matrices are inverted and may yield very large values.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(LinalgError::SingularMatrix);
        }
        Ok(self.adjugate().mul_scalar(1.0 / det))
    }

    /// Computes `A * Aᵀ`.
    pub fn mul_self_transpose(&self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.to_rows_array();
        let m01 = a00 * a10 + a01 * a11 + a02 * a12;
        let m02 = a00 * a20 + a01 * a21 + a02 * a22;
        let m12 = a10 * a20 + a11 * a21 + a12 * a22;
        Self::from_rows_array(&[
            a00 * a00 + a01 * a01 + a02 * a02,
            m01,
            m02,
            m01,
            a10 * a10 + a11 * a11 + a12 * a12,
            m12,
            m02,
            m12,
            a20 * a20 + a21 * a21 + a22 * a22,
        ])
    }

    /// Computes `Aᵀ * A`.
    pub fn mul_transpose_self(&self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.to_rows_array();
        let m01 = a00 * a01 + a10 * a11 + a20 * a21;
        let m02 = a00 * a02 + a10 * a12 + a20 * a22;
        let m12 = a01 * a02 + a11 * a12 + a21 * a22;
        Self::from_rows_array(&[
            a00 * a00 + a10 * a10 + a20 * a20,
            m01,
            m02,
            m01,
            a01 * a01 + a11 * a11 + a21 * a21,
            m12,
            m02,
            m12,
            a02 * a02 + a12 * a12 + a22 * a22,
        ])
    }

    /// Singular value decomposition `A = U * diag(s) * Vᵀ`.
    ///
    /// The decomposition runs in double precision and the factors are cast
    /// back to single precision. Singular values are not sorted.
    pub fn svd(&self) -> Result<Svd3, LinalgError> {
        let a = faer::Mat::<f64>::from_fn(3, 3, |i, j| self.0.col(j)[i] as f64);
        let output = svd::svd_decompose(&a)?;
        Ok(Svd3::from_output(&output))
    }

    /// Moore-Penrose pseudo-inverse `V * diag(1/s) * Uᵀ`.
    ///
    /// Zero singular values map to zero, so rank deficient matrices are supported.
    pub fn pseudo_inverse(&self) -> Result<Self, LinalgError> {
        let svd = self.svd()?;
        let s_inv = Self::from_diagonal(svd.singular_values().recip_or_zero());
        Ok(*svd.v() * s_inv * svd.u().transpose())
    }

    /// Tolerance based equality, as opposed to the exact `==`.
    #[inline]
    pub fn abs_diff_eq(&self, rhs: &Self, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(rhs.0, max_abs_diff)
    }
}

impl Default for Mat3F32 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::fmt::Display for Mat3F32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.to_rows_array();
        write!(
            f,
            "[[{a00}, {a01}, {a02}], [{a10}, {a11}, {a12}], [{a20}, {a21}, {a22}]]"
        )
    }
}

impl Deref for Mat3F32 {
    type Target = glam::Mat3;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Mat3F32 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<glam::Mat3> for Mat3F32 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self(m)
    }
}

impl From<Mat3F32> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3F32) -> Self {
        m.0
    }
}

// Matrix-matrix multiplication
impl std::ops::Mul<Mat3F32> for Mat3F32 {
    type Output = Mat3F32;

    #[inline]
    fn mul(self, rhs: Mat3F32) -> Self::Output {
        self.mul_mat(&rhs)
    }
}

// Matrix-vector multiplication
impl std::ops::Mul<Vec3F32> for Mat3F32 {
    type Output = Vec3F32;

    #[inline]
    fn mul(self, rhs: Vec3F32) -> Self::Output {
        self.mul_vec3(rhs)
    }
}

impl std::ops::Mul<f32> for Mat3F32 {
    type Output = Mat3F32;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl std::ops::Mul<Mat3F32> for f32 {
    type Output = Mat3F32;

    #[inline]
    fn mul(self, rhs: Mat3F32) -> Self::Output {
        rhs.mul_scalar(self)
    }
}

impl std::ops::Add<Mat3F32> for Mat3F32 {
    type Output = Mat3F32;

    #[inline]
    fn add(self, rhs: Mat3F32) -> Self::Output {
        self.add_mat(&rhs)
    }
}

impl std::ops::Sub<Mat3F32> for Mat3F32 {
    type Output = Mat3F32;

    #[inline]
    fn sub(self, rhs: Mat3F32) -> Self::Output {
        self.sub_mat(&rhs)
    }
}

impl std::ops::Neg for Mat3F32 {
    type Output = Mat3F32;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Mat3F32 {
        Mat3F32::from_rows_array(&[2.0, -1.0, 0.0, 1.0, 3.0, 2.0, 0.0, 1.0, 4.0])
    }

    /// Random matrix with a dominant diagonal, so it is well conditioned.
    fn random_well_conditioned(rng: &mut impl Rng) -> Mat3F32 {
        let mut arr = [0.0f32; 9];
        for v in arr.iter_mut() {
            *v = rng.random_range(-1.0..1.0);
        }
        Mat3F32::from_rows_array(&arr) + Mat3F32::IDENTITY * 3.0
    }

    #[test]
    fn test_mat3_mul_vec3() {
        let m = Mat3F32::IDENTITY;
        let v = Vec3F32::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);

        let m = sample();
        assert_eq!(m * v, Vec3F32::new(0.0, 13.0, 14.0));
    }

    #[test]
    fn test_mat3_row_major_layout() -> Result<(), LinalgError> {
        let m = Mat3F32::from_rows(
            Vec3F32::new(1.0, 2.0, 3.0),
            Vec3F32::new(4.0, 5.0, 6.0),
            Vec3F32::new(7.0, 8.0, 9.0),
        );
        assert_eq!(
            m.to_rows_array(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(m.get(0, 2)?, 3.0);
        assert_eq!(m.get(2, 0)?, 7.0);
        assert_eq!(m.row(1)?, Vec3F32::new(4.0, 5.0, 6.0));
        assert_eq!(m.col(1)?, Vec3F32::new(2.0, 5.0, 8.0));
        Ok(())
    }

    #[test]
    fn test_mat3_invalid_index() {
        let m = sample();
        assert_eq!(m.row(3), Err(LinalgError::InvalidIndex(3)));
        assert_eq!(m.col(7), Err(LinalgError::InvalidIndex(7)));
        assert_eq!(m.get(0, 3), Err(LinalgError::InvalidIndex(3)));
    }

    #[test]
    fn test_mat3_add_sub_scalar() {
        let m = sample();
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, Mat3F32::ZERO);
        assert_eq!(Mat3F32::ZERO.add_scalar(1.5).to_rows_array(), [1.5; 9]);
        assert_eq!(-m, m * -1.0);
    }

    #[test]
    fn test_mat3_transpose_involution() {
        let mut rng = rand::rng();
        for _ in 0..10 {
            let m = random_well_conditioned(&mut rng);
            assert_eq!(m.transpose().transpose(), m);
        }
    }

    #[test]
    fn test_mat3_determinant() {
        assert_eq!(Mat3F32::IDENTITY.determinant(), 1.0);
        assert_eq!(sample().determinant(), 24.0);
        let singular = Mat3F32::from_rows_array(&[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
        assert_eq!(singular.determinant(), 0.0);
    }

    #[test]
    fn test_mat3_determinant_scaling() {
        let m = sample();
        // scaling by a power of two is exact
        assert_eq!((m * 2.0).determinant(), 8.0 * m.determinant());

        let c = 1.5f32;
        assert_relative_eq!(
            (m * c).determinant(),
            c * c * c * m.determinant(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_mat3_adjugate() {
        let m = sample();
        let lhs = m * m.adjugate();
        let rhs = Mat3F32::IDENTITY * m.determinant();
        assert!(lhs.abs_diff_eq(&rhs, EPSILON), "{lhs} != {rhs}");
    }

    #[test]
    fn test_mat3_inverse_identity() -> Result<(), LinalgError> {
        assert_eq!(Mat3F32::IDENTITY.inverse()?, Mat3F32::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_mat3_inverse_zero() {
        assert_eq!(Mat3F32::ZERO.inverse(), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn test_mat3_inverse_roundtrip() -> Result<(), LinalgError> {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let m = random_well_conditioned(&mut rng);
            let product = m * m.inverse()?;
            assert!(
                product.abs_diff_eq(&Mat3F32::IDENTITY, EPSILON),
                "M * inv(M) != I\nM: {m}\nM * inv(M): {product}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_mat3_mul_self_transpose() {
        let m = sample();
        assert!(m
            .mul_self_transpose()
            .abs_diff_eq(&(m * m.transpose()), EPSILON));
        assert!(m
            .mul_transpose_self()
            .abs_diff_eq(&(m.transpose() * m), EPSILON));

        let aat = m.mul_self_transpose();
        assert_eq!(aat, aat.transpose());
    }

    #[test]
    fn test_mat3_pseudo_inverse_invertible() -> Result<(), LinalgError> {
        let m = sample();
        let pinv = m.pseudo_inverse()?;
        assert!(pinv.abs_diff_eq(&m.inverse()?, 1e-4), "{pinv}");
        Ok(())
    }

    #[test]
    fn test_mat3_pseudo_inverse_rank_deficient() -> Result<(), LinalgError> {
        let m = Mat3F32::from_diagonal(Vec3F32::new(2.0, 0.0, 4.0));
        assert_eq!(m.inverse(), Err(LinalgError::SingularMatrix));

        let pinv = m.pseudo_inverse()?;
        let expected = Mat3F32::from_diagonal(Vec3F32::new(0.5, 0.0, 0.25));
        assert!(pinv.abs_diff_eq(&expected, EPSILON), "{pinv}");

        // Moore-Penrose condition A * A⁺ * A = A
        assert!((m * pinv * m).abs_diff_eq(&m, EPSILON));
        Ok(())
    }

    #[test]
    fn test_mat3_yaw_pitch_roll() {
        let (yaw, pitch, roll) = (0.3, -0.4, 1.1);
        let m = Mat3F32::from_yaw_pitch_roll(yaw, pitch, roll);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = EPSILON);

        let (y, p, r) = m.to_yaw_pitch_roll();
        assert_relative_eq!(y, yaw, epsilon = EPSILON);
        assert_relative_eq!(p, pitch, epsilon = EPSILON);
        assert_relative_eq!(r, roll, epsilon = EPSILON);
    }

    #[test]
    fn test_mat3_rotation_z_layout() -> Result<(), LinalgError> {
        let m = Mat3F32::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(m.get(0, 1)?, -1.0, epsilon = EPSILON);
        assert_relative_eq!(m.get(1, 0)?, 1.0, epsilon = EPSILON);
        assert_eq!(m.get(2, 2)?, 1.0);
        Ok(())
    }
}
