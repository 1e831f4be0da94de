pub mod button;
pub mod input;

pub use button::{
    button_classes, ActionButton, Button, ButtonKind, ButtonProps, ButtonVariant,
    NavigationButton,
};
pub use input::{Input, InputProps};
