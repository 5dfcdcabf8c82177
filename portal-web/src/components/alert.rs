use yew::{Html, Properties, classes, function_component, html};

/// Visual tone of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-circle-check",
            Self::Error => "fa-circle-exclamation",
            Self::Info => "fa-circle-info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub message: String,
}

/// Inline message shown above a form.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    html! {
        <div role="alert" class={classes!("alert", props.kind.class())}>
            <i class={classes!("fa-solid", props.kind.icon())}></i>
            <span>{ &props.message }</span>
        </div>
    }
}
