use num::BigInt;

/// Exact sum of two integers. Never overflows.
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_positive_numbers() {
        assert_eq!(add(&big("2"), &big("3")), big("5"));
    }

    #[test]
    fn test_add_negatives() {
        assert_eq!(add(&big("-2"), &big("-3")), big("-5"));
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!(add(&big("-2"), &big("3")), big("1"));
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(add(&big("0"), &big("0")), big("0"));
    }

    #[test]
    fn test_add_past_u128() {
        let max = BigInt::from(u128::MAX);
        let sum = add(&max, &BigInt::from(1));
        assert_eq!(sum.to_string(), "340282366920938463463374607431768211456");

        let min = BigInt::from(i128::MIN);
        let sum = add(&min, &min);
        assert_eq!(sum.to_string(), "-340282366920938463463374607431768211456");
    }

    #[test]
    fn test_add_commutative_and_associative() {
        let values = [
            big("0"),
            big("-1"),
            big("7"),
            big("-98765432109876543210987654321"),
            big("12345678901234567890123456789"),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(add(a, b), add(b, a), "{} + {}", a, b);
                for c in &values {
                    assert_eq!(add(&add(a, b), c), add(a, &add(b, c)));
                }
            }
        }
    }
}
