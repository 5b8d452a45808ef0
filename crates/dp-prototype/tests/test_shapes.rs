//! Property tests for shape geometry and clone independence.

use approx::assert_relative_eq;
use proptest::prelude::*;

use dp_prototype::{Character, CharacterClass, Shape, Triangle};

proptest! {
    #[test]
    fn valid_triangles_have_positive_measures(
        a in 0.1f64..100.0,
        b in 0.1f64..100.0,
        c in 0.1f64..100.0,
    ) {
        match Triangle::new(a, b, c) {
            Ok(t) => {
                // Accepted triples satisfy the triangle inequality and
                // produce strictly positive, finite measures.
                prop_assert!(a + b > c && a + c > b && b + c > a);
                // Near-degenerate triples can round Heron's formula down to
                // zero, so only non-negativity is asserted.
                prop_assert!(t.area() >= 0.0 && t.area().is_finite());
                assert_relative_eq!(t.perimeter(), a + b + c);
            }
            Err(_) => {
                prop_assert!(!(a + b > c && a + c > b && b + c > a));
            }
        }
    }

    #[test]
    fn scaling_a_triangle_scales_the_perimeter(
        a in 1.0f64..10.0,
        b in 1.0f64..10.0,
        k in 1.0f64..5.0,
    ) {
        // a, a+b/2, a+b/2 always forms a (possibly isosceles) triangle
        // when b < 2a + b, which holds for positive a and b.
        let s = a + b / 2.0;
        let t1 = Triangle::new(a, s, s).unwrap();
        let t2 = Triangle::new(a * k, s * k, s * k).unwrap();
        assert_relative_eq!(t2.perimeter(), t1.perimeter() * k, max_relative = 1e-12);
        assert_relative_eq!(t2.area(), t1.area() * k * k, max_relative = 1e-9);
    }

    #[test]
    fn shape_clone_never_aliases(
        radius in 0.1f64..50.0,
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
    ) {
        let mut original = Shape::circle("c", radius).unwrap();
        let clone = original.clone();

        original.set_position(x, y);
        original.set_visible(false);

        prop_assert_eq!(clone.position(), dp_prototype::Position::default());
        prop_assert!(clone.is_visible());
        assert_relative_eq!(clone.area(), original.area());
    }

    #[test]
    fn character_clone_never_aliases(extra_skills in 1usize..10) {
        let original = Character::new(CharacterClass::Rogue, "R");
        let mut clone = original.clone();

        for i in 0..extra_skills {
            clone.add_skill(&format!("skill {i}"));
        }

        prop_assert_eq!(original.skills().len(), 4);
        prop_assert_eq!(clone.skills().len(), 4 + extra_skills);
    }
}
