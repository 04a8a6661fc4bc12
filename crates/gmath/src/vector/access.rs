//! Named element accessors for vectors with up to 4 elements.
//!
//! Each element is reachable under three names: a position name (`x`, `y`, `z`, `w`), a color
//! name (`r`, `g`, `b`, `a`), and a texture coordinate name (`s`, `t`, `p`, `q`). All three names
//! index the same slot of the backing array.

use super::Vector;

macro_rules! accessors {
    ($(
        $n:literal => {
            $($idx:literal => [$($get:ident $get_mut:ident),+];)+
        }
    )+) => {
        $(
            impl<T> Vector<T, $n> {
                $($(
                    #[doc = concat!("Returns element ", stringify!($idx), ".")]
                    #[inline]
                    pub fn $get(&self) -> T
                    where
                        T: Copy,
                    {
                        self.0[$idx]
                    }

                    #[doc = concat!("Returns a mutable reference to element ", stringify!($idx), ".")]
                    #[inline]
                    pub fn $get_mut(&mut self) -> &mut T {
                        &mut self.0[$idx]
                    }
                )+)+
            }
        )+
    };
}

accessors! {
    1 => {
        0 => [x x_mut, r r_mut, s s_mut];
    }
    2 => {
        0 => [x x_mut, r r_mut, s s_mut];
        1 => [y y_mut, g g_mut, t t_mut];
    }
    3 => {
        0 => [x x_mut, r r_mut, s s_mut];
        1 => [y y_mut, g g_mut, t t_mut];
        2 => [z z_mut, b b_mut, p p_mut];
    }
    4 => {
        0 => [x x_mut, r r_mut, s s_mut];
        1 => [y y_mut, g g_mut, t t_mut];
        2 => [z z_mut, b b_mut, p p_mut];
        3 => [w w_mut, a a_mut, q q_mut];
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Vec3f, Vec4f};

    #[test]
    fn aliases_share_storage() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::Y.g(), 1.0);
        assert_eq!(Vec3f::Z.p(), 1.0);
        assert_eq!(Vec4f::W.a(), 1.0);
        assert_eq!(Vec4f::W.q(), 1.0);

        let mut v = vec2(0, 1);
        *v.r_mut() = 777;
        assert_eq!(v.x(), 777);
        assert_eq!(v.s(), 777);
        assert_eq!(v[0], 777);
        *v.t_mut() = 9;
        assert_eq!(v.y(), 9);
        assert_eq!(v.g(), 9);
        assert_eq!(v, [777, 9]);
    }

    #[test]
    fn copies_are_independent() {
        let a = vec4(1, 2, 3, 4);
        let mut b = a;
        *b.w_mut() = 40;
        assert_eq!(a.w(), 4);
        assert_eq!(b.w(), 40);
    }
}
