use glossa_shared::TermDto;
use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct TermTableProps {
  pub terms: Vec<TermDto>
}

#[function_component(TermTable)]
pub fn term_table(
  props: &TermTableProps
) -> Html {
  if props.terms.is_empty() {
    return html! {
        <div class="panel empty">{ "No terms match the current filters." }</div>
    };
  }

  html! {
      <table class="panel terms">
          <thead>
              <tr>
                  <th>{ "Term" }</th>
                  <th>{ "Definition" }</th>
                  <th>{ "Translation" }</th>
                  <th>{ "Category" }</th>
                  <th>{ "Theme" }</th>
                  <th>{ "Language" }</th>
                  <th></th>
              </tr>
          </thead>
          <tbody>
              {
                  for props.terms.iter().map(|term| {
                      let edit = Route::EditTerm { id: term.id.clone() };
                      html! {
                          <tr key={term.id.clone()}>
                              <td class="term">{ &term.term }</td>
                              <td>{ &term.definition }</td>
                              <td>{ &term.translation }</td>
                              <td>{ &term.grammatical_category }</td>
                              <td>{ &term.theme }</td>
                              <td>{ &term.language }</td>
                              <td><Link<Route> to={edit}>{ "Edit" }</Link<Route>></td>
                          </tr>
                      }
                  })
              }
          </tbody>
      </table>
  }
}
