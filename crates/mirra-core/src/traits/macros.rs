// impl_leaf
// Implements the reflection surface for the closed leaf set: values the
// traversal reports but never descends into.
macro_rules! impl_leaf {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl $crate::traits::Node for $type {
                fn view(&self) -> $crate::view::FieldView<'_> {
                    $crate::view::FieldView::Leaf($crate::value::Value::$variant((*self).into()))
                }
            }

            impl $crate::traits::TypeName for $type {
                fn simple_name() -> &'static str {
                    stringify!($type)
                }
            }

            impl $crate::traits::FieldValue for $type {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::value::Value::$variant((*self).into())
                }

                fn from_value(value: &$crate::value::Value) -> Option<Self> {
                    match value {
                        $crate::value::Value::$variant(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}
