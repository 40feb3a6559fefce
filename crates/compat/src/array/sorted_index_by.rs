use std::cmp::Ordering;

use es_toolkit_util::compare::{loose_lt, loose_lte};
use es_toolkit_util::JsValue;

use crate::array::order_class::OrderClass;
use crate::util::iteratee::Iteratee;

/// Largest array length upstream accepts (`2^32 - 1`).
const MAX_ARRAY_LENGTH: usize = 4_294_967_295;
/// Results are capped one below the maximum length.
const MAX_ARRAY_INDEX: usize = MAX_ARRAY_LENGTH - 1;

/// Binary-searches the index at which `value` should be inserted into
/// the sorted slice `array`, computing sort keys through `key`.
///
/// This is the engine behind the whole `sorted_index` family, and it is
/// usable directly with any element type. `ret_highest` selects the
/// rightmost insertion point among equal keys instead of the leftmost.
///
/// Keys of different kinds order by [`OrderClass`] rank; only when both
/// keys are ordinary comparables does a loose (JS `<` / `<=`) value
/// comparison run. Ties inside the non-comparable classes are decided
/// by `ret_highest` alone.
///
/// The slice is assumed to already be sorted under the same key
/// ordering; this is not verified, and the result for an unsorted slice
/// carries no insertion-order guarantee. An empty slice answers `0`
/// without invoking `key` at all. A panic raised by `key` propagates
/// unchanged, aborting the search.
///
/// # Examples
///
/// ```
/// use es_toolkit_compat::sorted_index_with;
///
/// struct User {
///     score: f64,
/// }
///
/// let users = [User { score: 10.0 }, User { score: 30.0 }];
/// let probe = User { score: 20.0 };
/// let at = sorted_index_with(&users, &probe, |u| u.score.into(), false);
/// assert_eq!(at, 1);
/// ```
pub fn sorted_index_with<T, F>(array: &[T], value: &T, mut key: F, ret_highest: bool) -> usize
where
    F: FnMut(&T) -> JsValue,
{
    let mut low = 0;
    let mut high = array.len();
    if high == 0 {
        return 0;
    }

    let probe = key(value);
    let probe_class = OrderClass::of(&probe);

    while low < high {
        let mid = (low + high) / 2;
        let computed = key(&array[mid]);

        // Does array[mid] sort strictly before the insertion point?
        let set_low = match OrderClass::of(&computed).cmp(&probe_class) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal if probe_class == OrderClass::Comparable => {
                if ret_highest {
                    loose_lte(&computed, &probe)
                } else {
                    loose_lt(&computed, &probe)
                }
            }
            // Equal non-comparable classes: only ret_highest pushes past.
            Ordering::Equal => ret_highest,
        };

        if set_low {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    high.min(MAX_ARRAY_INDEX)
}

/// This method is like [`sorted_index`](crate::sorted_index) except
/// that it accepts an [`Iteratee`] which is invoked for `value` and
/// each inspected element of `array` to compute their sort ranking.
///
/// Mirrors upstream `sortedIndexBy.ts`.
///
/// # Examples
///
/// ```
/// use es_toolkit_compat::{sorted_index_by, Iteratee};
/// use es_toolkit_util::JsValue;
/// use serde_json::json;
///
/// let objects: Vec<JsValue> = vec![json!({"x": 4}).into(), json!({"x": 5}).into()];
/// let probe: JsValue = json!({"x": 4}).into();
///
/// assert_eq!(sorted_index_by(&objects, &probe, &Iteratee::property("x")), 0);
/// assert_eq!(
///     sorted_index_by(&objects, &probe, &Iteratee::func(|o| o.get("x"))),
///     0
/// );
/// ```
pub fn sorted_index_by(array: &[JsValue], value: &JsValue, iteratee: &Iteratee) -> usize {
    let key = iteratee.resolve();
    sorted_index_with(array, value, |v| key(v), false)
}

/// This method is like [`sorted_last_index`](crate::sorted_last_index)
/// except that it accepts an [`Iteratee`] to compute sort rankings.
///
/// Mirrors upstream `sortedLastIndexBy.ts`.
///
/// # Examples
///
/// ```
/// use es_toolkit_compat::{sorted_last_index_by, Iteratee};
/// use es_toolkit_util::JsValue;
/// use serde_json::json;
///
/// let objects: Vec<JsValue> = vec![json!({"x": 4}).into(), json!({"x": 4}).into()];
/// let probe: JsValue = json!({"x": 4}).into();
///
/// assert_eq!(sorted_last_index_by(&objects, &probe, &Iteratee::property("x")), 2);
/// ```
pub fn sorted_last_index_by(array: &[JsValue], value: &JsValue, iteratee: &Iteratee) -> usize {
    let key = iteratee.resolve();
    sorted_index_with(array, value, |v| key(v), true)
}
