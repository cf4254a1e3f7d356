use std::any::Any;
use std::marker::PhantomData;

use mockall::Predicate;

/// Predicates over the arguments of a call, recorded as a tuple of type `Args`.
///
/// Implemented for tuples of [predicates][mockall::predicate] of the same arity, each one
/// evaluating the argument at the same position.
pub trait ArgsPredicate<Args>: Send + Sync {
    /// Check if the given arguments satisfy every predicate.
    fn eval(&self, args: &Args) -> bool;

    /// Description of the expected arguments, separated by commas.
    fn description(&self) -> String;
}

macro_rules! impl_args_predicate {
    ($($arg:ident $predicate:ident : $idx:tt),+) => {
        impl<$($arg, $predicate),+> ArgsPredicate<($($arg,)+)> for ($($predicate,)+)
        where
            $($predicate: Predicate<$arg> + Send + Sync),+
        {
            fn eval(&self, args: &($($arg,)+)) -> bool {
                true $(&& self.$idx.eval(&args.$idx))+
            }

            fn description(&self) -> String {
                [$(self.$idx.to_string()),+].join(", ")
            }
        }
    };
}

impl_args_predicate!(A PA: 0);
impl_args_predicate!(A PA: 0, B PB: 1);
impl_args_predicate!(A PA: 0, B PB: 1, C PC: 2);
impl_args_predicate!(A PA: 0, B PB: 1, C PC: 2, D PD: 3);

/// Type-erased [ArgsPredicate] stored by an expectation.
pub(crate) trait ArgsMatcher: Send + Sync {
    /// Arguments of another type never match.
    fn matches(&self, args: &dyn Any) -> bool;

    fn description(&self) -> String;
}

pub(crate) struct TypedArgsMatcher<Args, P> {
    predicates: P,
    args: PhantomData<fn(&Args)>,
}

impl<Args, P> TypedArgsMatcher<Args, P> {
    pub(crate) fn new(predicates: P) -> Self {
        Self {
            predicates,
            args: PhantomData,
        }
    }
}

impl<Args: 'static, P: ArgsPredicate<Args>> ArgsMatcher for TypedArgsMatcher<Args, P> {
    fn matches(&self, args: &dyn Any) -> bool {
        args.downcast_ref::<Args>()
            .is_some_and(|values| self.predicates.eval(values))
    }

    fn description(&self) -> String {
        self.predicates.description()
    }
}

#[cfg(test)]
mod tests {
    use mockall::PredicateBooleanExt;
    use mockall::predicate::{always, eq, function, gt, le};

    use super::*;

    type GoArgs = (i32, i32);

    fn erased<Args: 'static, P: ArgsPredicate<Args>>(predicates: P) -> impl ArgsMatcher {
        TypedArgsMatcher::<Args, P>::new(predicates)
    }

    #[test]
    fn tuple_evaluate_element_by_element() {
        let predicates = (eq(10), gt(15));

        assert!(ArgsPredicate::<GoArgs>::eval(&predicates, &(10, 20)));
        assert!(!ArgsPredicate::<GoArgs>::eval(&predicates, &(11, 20)));
        assert!(!ArgsPredicate::<GoArgs>::eval(&predicates, &(10, 15)));
    }

    #[test]
    fn combined_predicates_apply_to_a_single_argument() {
        let predicates = (gt(10).and(le(20)), le(25).or(gt(100)));

        assert!(ArgsPredicate::<GoArgs>::eval(&predicates, &(11, 101)));
        assert!(!ArgsPredicate::<GoArgs>::eval(&predicates, &(21, 21)));
        assert!(!ArgsPredicate::<GoArgs>::eval(&predicates, &(11, 26)));
    }

    #[test]
    fn arguments_of_another_type_or_arity_never_match() {
        let matcher = erased::<GoArgs, _>((always(), always()));

        assert!(matcher.matches(&(10, 20)));
        assert!(!matcher.matches(&(10_i64, 20_i64)));
        assert!(!matcher.matches(&(10,)));
        assert!(!matcher.matches(&(10, 20, 30)));
        assert!(!matcher.matches(&()));
    }

    #[test]
    fn description_list_every_argument() {
        assert_eq!(
            "var == 10, var > 15",
            erased::<GoArgs, _>((eq(10), gt(15))).description()
        );
        assert_eq!(
            "var == \"name\"",
            erased::<(String,), _>((eq("name".to_string()),)).description()
        );
        let is_even = function(|x: &i32| x % 2 == 0).fn_name("is_even");
        assert_eq!(
            "is_even(var), true",
            erased::<GoArgs, _>((is_even, always())).description()
        );
    }
}
