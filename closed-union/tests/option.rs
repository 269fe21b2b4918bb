//! Integration tests for generic and non-serializable unions.

use closed_union::ClosedUnion;

mod maybe {
    #[closed_union::union(derive(Debug, Clone, PartialEq))]
    pub mod option {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Some<TValue> {
            pub value: TValue,
        }

        #[derive(Debug, Clone, PartialEq)]
        pub struct None;
    }

    impl<TValue> Option<TValue> {
        pub fn unwrap_or(self, fallback: TValue) -> TValue {
            match self {
                Option::Some(some) => some.value,
                Option::None(_) => fallback,
            }
        }
    }
}

#[closed_union::union(name = "Outcome", derive(Debug))]
pub mod outcomes {
    #[derive(Debug)]
    pub struct Success<'a, T> {
        pub value: &'a T,
    }

    #[derive(Debug)]
    pub struct Failure<E> {
        pub error: E,
        pub retryable: bool,
    }
}

use maybe::Option;

#[test]
fn test_generic_identity() {
    assert_eq!(<Option<u8> as ClosedUnion>::NAME, "Option<_>");
    assert_eq!(<Option<u8> as ClosedUnion>::CASES, &["Some", "None"]);
    assert!(!<Option<u8> as ClosedUnion>::SERIALIZABLE);
}

#[test]
fn test_generic_factories() {
    let some = Option::some(5u8);
    assert_eq!(some, Option::Some(maybe::option::Some { value: 5 }));
    assert_eq!(some.case_name(), "Some");

    let none: Option<u8> = Option::NONE;
    assert_eq!(none.case_name(), "None");
}

#[test]
fn test_user_impl_on_generated_enum() {
    assert_eq!(Option::some(3).unwrap_or(9), 3);
    assert_eq!(Option::NONE.unwrap_or(9), 9);
}

#[test]
fn test_from_generic_case() {
    let value: Option<&str> = maybe::option::Some { value: "x" }.into();
    assert_eq!(value, Option::some("x"));
}

#[test]
fn test_merged_generics() {
    let value = 42;
    let success: Outcome<'_, i32, String> = Outcome::success(&value);
    let failure: Outcome<'_, i32, String> = Outcome::failure("boom".to_string(), true);

    assert_eq!(success.case_name(), "Success");
    assert_eq!(failure.case_name(), "Failure");
    assert_eq!(<Outcome<'_, i32, String> as ClosedUnion>::NAME, "Outcome<'_, _, _>");

    match failure {
        Outcome::Failure(outcomes::Failure { error, retryable }) => {
            assert_eq!(error, "boom");
            assert!(retryable);
        }
        Outcome::Success(_) => panic!("expected a failure"),
    }
}

#[test]
fn test_exhaustive_match() {
    fn describe(value: &Option<i32>) -> &'static str {
        match value {
            Option::Some(_) => "some",
            Option::None(_) => "none",
        }
    }

    assert_eq!(describe(&Option::some(1)), "some");
    assert_eq!(describe(&Option::NONE), "none");
}
