use glossa_core::choice::OTHER_OPTION;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

/// Dropdown with an "Other" option that swaps in a free-text input.
#[derive(Properties, PartialEq)]
pub struct SelectWithOtherProps {
  pub label:        String,
  pub name:         String,
  pub options:      Vec<String>,
  pub selected:     String,
  pub free_text:    String,
  #[prop_or_default]
  pub disabled:     bool,
  pub on_select:    Callback<String>,
  pub on_free_text: Callback<String>
}

#[function_component(SelectWithOther)]
pub fn select_with_other(
  props: &SelectWithOtherProps
) -> Html {
  let on_change = {
    let on_select = props.on_select.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      on_select.emit(select.value());
    })
  };
  let on_input = {
    let on_free_text =
      props.on_free_text.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_free_text.emit(input.value());
      }
    )
  };
  let is_other =
    props.selected == OTHER_OPTION;
  let free_text_id =
    format!("new-{}", props.name);

  html! {
      <div class="field">
          <label for={props.name.clone()}>{ &props.label }</label>
          <select
              id={props.name.clone()}
              name={props.name.clone()}
              onchange={on_change}
              disabled={props.disabled}
          >
              {
                  for props.options.iter().map(|option| {
                      html! {
                          <option
                              value={option.clone()}
                              selected={*option == props.selected}
                          >
                              { option }
                          </option>
                      }
                  })
              }
          </select>
          if is_other {
              <input
                  id={free_text_id}
                  value={props.free_text.clone()}
                  oninput={on_input}
                  disabled={props.disabled}
                  placeholder={format!("New {}", props.label.to_lowercase())}
              />
          }
      </div>
  }
}
