macro_rules! itemize(($($blob:item)*) => ($($blob)*));

macro_rules! getter {
    (ref $name:ident: $kind:ty) => (
        #[inline(always)]
        pub fn $name(&self) -> &$kind {
            &self.$name
        }
    );
    ($name:ident: $kind:ty) => (
        #[inline(always)]
        pub fn $name(&self) -> $kind {
            self.$name
        }
    );
}

macro_rules! getters {
    ($(ref $name:ident: $kind:ty,)*) => ($(getter!(ref $name: $kind);)*);
    ($($name:ident: $kind:ty,)*) => ($(getter!($name: $kind);)*);
}

macro_rules! order {
    ($name:ident($($field:tt),+) ascending) => (order! { $name($($field),+) Less < Greater });
    ($name:ident($($field:tt),+) descending) => (order! { $name($($field),+) Greater < Less });
    ($name:ident($($field:tt),+) $less:ident < $greater:ident) => (itemize! {
        impl ::std::cmp::Eq for $name {
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                $(
                    if self.$field < other.$field {
                        return ::std::cmp::Ordering::$less;
                    } else if self.$field > other.$field {
                        return ::std::cmp::Ordering::$greater;
                    }
                )+
                ::std::cmp::Ordering::Equal
            }
        }

        impl ::std::cmp::PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == ::std::cmp::Ordering::Equal
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
    });
}

macro_rules! raise(
    (invalid, $($arg:tt)*) => (return Err($crate::Error::invalid(format!($($arg)*))));
    (inconsistent, $($arg:tt)*) => (return Err($crate::Error::inconsistent(format!($($arg)*))));
);

macro_rules! some(
    ($option:expr) => (match $option {
        Some(value) => value,
        _ => raise!(inconsistent, "encountered a logic error"),
    });
    ($option:expr, $($arg:tt)+) => (match $option {
        Some(value) => value,
        _ => raise!(inconsistent, $($arg)*),
    });
);
