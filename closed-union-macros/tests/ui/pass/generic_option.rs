use closed_union::ClosedUnion;

mod maybe {
    #[closed_union::union(derive(Debug, PartialEq))]
    pub mod option {
        #[derive(Debug, PartialEq)]
        pub struct Some<TValue> {
            pub value: TValue,
        }

        #[derive(Debug, PartialEq)]
        pub struct None;
    }
}

fn unwrap_or<T>(value: maybe::Option<T>, fallback: T) -> T {
    match value {
        maybe::Option::Some(some) => some.value,
        maybe::Option::None(_) => fallback,
    }
}

fn main() {
    let some = maybe::Option::some(5);
    assert_eq!(some.case_name(), "Some");
    assert_eq!(unwrap_or(some, 0), 5);
    assert_eq!(unwrap_or(maybe::Option::<i32>::NONE, 7), 7);

    assert_eq!(<maybe::Option<u8> as ClosedUnion>::NAME, "Option<_>");
    assert_eq!(<maybe::Option<u8> as ClosedUnion>::CASES, &["Some", "None"]);
    assert!(!<maybe::Option<u8> as ClosedUnion>::SERIALIZABLE);
}
