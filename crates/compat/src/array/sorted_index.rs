use es_toolkit_util::JsValue;

use crate::array::sorted_index_by::sorted_index_with;

/// Uses a binary search to determine the lowest index at which `value`
/// should be inserted into `array` in order to maintain its sort order.
///
/// Mirrors upstream `sortedIndex.ts`. The slice is assumed sorted; an
/// empty slice answers `0`.
///
/// # Examples
///
/// ```
/// use es_toolkit_compat::sorted_index;
/// use es_toolkit_util::JsValue;
///
/// let array: Vec<JsValue> = vec![30.into(), 50.into()];
/// assert_eq!(sorted_index(&array, &40.into()), 1);
/// ```
pub fn sorted_index(array: &[JsValue], value: &JsValue) -> usize {
    sorted_index_with(array, value, |v| v.clone(), false)
}

/// Like [`sorted_index`] but returns the highest index at which `value`
/// should be inserted, i.e. after any run of equal elements.
///
/// Mirrors upstream `sortedLastIndex.ts`.
///
/// # Examples
///
/// ```
/// use es_toolkit_compat::sorted_last_index;
/// use es_toolkit_util::JsValue;
///
/// let array: Vec<JsValue> = vec![4.into(), 5.into(), 5.into(), 5.into(), 6.into()];
/// assert_eq!(sorted_last_index(&array, &5.into()), 4);
/// ```
pub fn sorted_last_index(array: &[JsValue], value: &JsValue) -> usize {
    sorted_index_with(array, value, |v| v.clone(), true)
}
