use std::fmt::Debug;

/// Integer-like key types the radix sorter can bucket.
///
/// Digits are always taken from the magnitude widened to `u64`, so place
/// values never have to fit in the key's own width. The trait is sealed;
/// it is implemented for the primitive integers up to 64 bits.
pub trait RadixElement: Copy + Ord + Debug + private::Sealed {
    const SIGNED: bool;

    fn is_negative(self) -> bool;

    /// Absolute value as `u64`. Never overflows, `MIN` included.
    fn magnitude(self) -> u64;
}

macro_rules! impl_unsigned { ($($t:ty)*) => ($(
    impl RadixElement for $t {
        const SIGNED: bool = false;

        #[inline]
        fn is_negative(self) -> bool {
            false
        }

        #[inline]
        fn magnitude(self) -> u64 {
            self as u64
        }
    }
)*) }

macro_rules! impl_signed { ($($t:ty)*) => ($(
    impl RadixElement for $t {
        const SIGNED: bool = true;

        #[inline]
        fn is_negative(self) -> bool {
            self < 0
        }

        #[inline]
        fn magnitude(self) -> u64 {
            self.unsigned_abs() as u64
        }
    }
)*) }

impl_unsigned! { u8 u16 u32 u64 usize }
impl_signed! { i8 i16 i32 i64 isize }

mod private {
    pub trait Sealed {}
    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }
    sealed_impl! {
        u8 u16 u32 u64 usize
        i8 i16 i32 i64 isize
    }
}
