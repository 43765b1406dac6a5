//! Ordinary Bessel functions of the first kind.
//!
//! Integer orders use the classic rational approximations below `|x| = 8`
//! and the asymptotic forms above, with the stable recurrences for higher
//! orders. The two half-integer orders that appear in the Fresnel integral
//! have exact closed forms and are evaluated directly.

use std::f64::consts::PI;

/// J0(x). Absolute accuracy is around 1e-8.
pub fn j0(x: f64) -> f64 {
    if x.abs() < 8.0 {
        let y = x * x;
        let ans1 = 57568490574.0
            + y * (-13362590354.0
                + y * (651619640.7
                    + y * (-11214424.18 + y * (77392.33017 + y * (-184.9052456)))));
        let ans2 = 57568490411.0
            + y * (1029532985.0 + y * (9494680.718 + y * (59272.64853 + y * (267.8532712 + y))));
        ans1 / ans2
    } else {
        let ax = x.abs();
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 0.785398164;
        let ans1 = 1.0
            + y * (-0.1098628627e-2
                + y * (0.2734510407e-4 + y * (-0.2073370639e-5 + y * 0.2093887211e-6)));
        let ans2 = -0.1562499995e-1
            + y * (0.1430488765e-3
                + y * (-0.6911147651e-5 + y * (0.7621095161e-6 - y * 0.934935152e-7)));
        (ans1 * xx.cos() - z * ans2 * xx.sin()) * (0.636619772 / ax).sqrt()
    }
}

/// J1(x). Odd in x.
pub fn j1(x: f64) -> f64 {
    if x.abs() < 8.0 {
        let y = x * x;
        let ans1 = x
            * (72362614232.0
                + y * (-7895059235.0
                    + y * (242396853.1
                        + y * (-2972611.439 + y * (15704.48260 + y * (-30.16036606))))));
        let ans2 = 144725228442.0
            + y * (2300535178.0 + y * (18583304.74 + y * (99447.43394 + y * (376.9991397 + y))));
        ans1 / ans2
    } else {
        let ax = x.abs();
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356194491;
        let ans1 = 1.0
            + y * (0.183105e-2
                + y * (-0.3516396496e-4 + y * (0.2457520174e-5 + y * (-0.240337019e-6))));
        let ans2 = 0.04687499995
            + y * (-0.2002690873e-3
                + y * (0.8449199096e-5 + y * (-0.88228987e-6 + y * 0.105787412e-6)));
        let ans = (ans1 * xx.cos() - z * ans2 * xx.sin()) * (0.636619772 / ax).sqrt();
        if x < 0.0 {
            -ans
        } else {
            ans
        }
    }
}

/// Jn(x) for any integer order.
///
/// Upward recurrence where it is stable (`|x| > n`), otherwise downward
/// recurrence normalised by the summed series. Negative orders reflect
/// through `J_{-n} = (-1)^n J_n`.
pub fn jn(n: i32, x: f64) -> f64 {
    if n < 0 {
        let ans = jn(-n, x);
        return if (-n) % 2 == 0 { ans } else { -ans };
    }
    if n == 0 {
        return j0(x);
    }
    if n == 1 {
        return j1(x);
    }

    let ax = x.abs();
    if ax == 0.0 {
        return 0.0;
    }

    const ACC: f64 = 40.0;
    const BIGNO: f64 = 1.0e10;
    const BIGNI: f64 = 1.0e-10;

    let tox = 2.0 / ax;
    let ans = if ax > n as f64 {
        let mut bjm = j0(ax);
        let mut bj = j1(ax);
        for j in 1..n {
            let bjp = j as f64 * tox * bj - bjm;
            bjm = bj;
            bj = bjp;
        }
        bj
    } else {
        let m = 2 * ((n + (ACC * n as f64).sqrt() as i32) / 2);
        let mut jsum = false;
        let mut bsum = 0.0;
        let mut ans = 0.0;
        let mut bjp = 0.0;
        let mut bj = 1.0;
        for j in (1..=m).rev() {
            let bjm = j as f64 * tox * bj - bjp;
            bjp = bj;
            bj = bjm;
            if bj.abs() > BIGNO {
                bj *= BIGNI;
                bjp *= BIGNI;
                ans *= BIGNI;
                bsum *= BIGNI;
            }
            if jsum {
                bsum += bj;
            }
            jsum = !jsum;
            if j == n {
                ans = bjp;
            }
        }
        bsum = 2.0 * bsum - bj;
        ans / bsum
    };

    if x < 0.0 && n % 2 == 1 {
        -ans
    } else {
        ans
    }
}

/// J_{1/2}(x) = sqrt(2/(pi x)) sin(x). Unguarded at x = 0.
pub fn j_half(x: f64) -> f64 {
    (2.0 / (PI * x)).sqrt() * x.sin()
}

/// J_{-1/2}(x) = sqrt(2/(pi x)) cos(x). Unguarded at x = 0.
pub fn j_neg_half(x: f64) -> f64 {
    (2.0 / (PI * x)).sqrt() * x.cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Reference values from the power series summed to convergence.

    #[test]
    fn j0_low_order_values() {
        assert_relative_eq!(j0(0.0), 1.0, epsilon = 1e-7);
        assert_relative_eq!(j0(1.0), 0.7651976865579666, epsilon = 1e-7);
        assert_relative_eq!(j0(10.0), -0.24593576445134288, epsilon = 1e-7);
        // first zero of J0
        assert!(j0(2.404825557695773).abs() < 1e-6);
    }

    #[test]
    fn j1_low_order_values() {
        assert_relative_eq!(j1(0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(j1(1.0), 0.44005058574493355, epsilon = 1e-7);
        assert_relative_eq!(j1(1.8411837813406593), 0.5818652242815966, epsilon = 1e-7);
        assert_relative_eq!(j1(10.0), 0.04347274616898594, epsilon = 1e-7);
    }

    #[test]
    fn jn_recurrence_values() {
        assert_relative_eq!(jn(2, 1.0), 0.11490348493190047, epsilon = 1e-7);
        assert_relative_eq!(jn(3, 2.5), 0.2166003910391135, epsilon = 1e-7);
        assert_relative_eq!(jn(4, 2.0), 0.03399571980756843, epsilon = 1e-7);
        assert_relative_eq!(jn(5, 9.3), -0.12192973600599145, epsilon = 1e-7);
    }

    #[test]
    fn jn_order_reflection() {
        assert_eq!(jn(-1, 1.2407553924130303), -j1(1.2407553924130303));
        assert_eq!(jn(-2, 2.5), jn(2, 2.5));
        assert_eq!(jn(-3, 2.5), -jn(3, 2.5));
    }

    #[test]
    fn jn_argument_parity() {
        assert_eq!(jn(2, -1.0), jn(2, 1.0));
        assert_eq!(jn(3, -2.5), -jn(3, 2.5));
        assert_eq!(j1(-1.0), -j1(1.0));
        assert_eq!(j0(-1.0), j0(1.0));
        assert_eq!(jn(7, 0.0), 0.0);
    }

    #[test]
    fn half_order_closed_forms() {
        assert_relative_eq!(
            j_half(1.0),
            (2.0 / PI).sqrt() * 1.0f64.sin(),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            j_neg_half(1.0),
            (2.0 / PI).sqrt() * 1.0f64.cos(),
            epsilon = 1e-15
        );
        // |J_{1/2}|^2 + |J_{-1/2}|^2 = 2/(pi x)
        for &x in &[0.3, 1.0, 2.5, 7.0] {
            let sum = j_half(x) * j_half(x) + j_neg_half(x) * j_neg_half(x);
            assert_relative_eq!(sum, 2.0 / (PI * x), max_relative = 1e-12);
        }
    }
}
