use digitpad_shared::Label;

pub fn random_label() -> Label {
    Label::from_unit(js_sys::Math::random())
}
