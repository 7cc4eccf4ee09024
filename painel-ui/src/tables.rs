#![cfg(target_arch = "wasm32")]

use painel_core::{format_number, MunicipalityAttendance, RankedProfessional};
use yew::prelude::*;

use crate::components::{EmptyState, TableWrapper};
use crate::copy;

#[derive(Properties, PartialEq)]
pub struct ProductivityTableProps {
    pub rows: Vec<RankedProfessional>,
}

#[function_component(ProductivityTable)]
pub fn productivity_table(props: &ProductivityTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <EmptyState message={copy::EMPTY_PRODUCTIVITY} /> };
    }

    html! {
        <TableWrapper>
            <table class="data-table">
                <thead>
                    <tr>
                        { for copy::PRODUCTIVITY_HEADERS.iter().map(|header| html! { <th>{ *header }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for props.rows.iter().map(|row| {
                            let key = row
                                .cns_profissional
                                .clone()
                                .unwrap_or_else(|| row.position.to_string());
                            html! {
                                <tr key={key}>
                                    <td>{ row.position }</td>
                                    <td>{ row.profissional_nome.clone() }</td>
                                    <td>{ row.cbo_descricao.clone() }</td>
                                    <td>{ format_number(Some(row.total_atendimentos as f64)) }</td>
                                    <td>{ format_number(Some(row.pacientes_unicos as f64)) }</td>
                                    <td>{ format_number(Some(row.media_diaria_atendimentos)) }</td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        </TableWrapper>
    }
}

#[derive(Properties, PartialEq)]
pub struct MunicipalityTableProps {
    pub rows: Vec<MunicipalityAttendance>,
}

#[function_component(MunicipalityTable)]
pub fn municipality_table(props: &MunicipalityTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <EmptyState message={copy::EMPTY_MUNICIPALITIES} /> };
    }

    html! {
        <TableWrapper scroll=true>
            <table class="data-table">
                <thead>
                    <tr>
                        { for copy::MUNICIPALITY_HEADERS.iter().map(|header| html! { <th>{ *header }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for props.rows.iter().enumerate().map(|(index, row)| {
                            let key = row
                                .municipio_ibge
                                .clone()
                                .unwrap_or_else(|| index.to_string());
                            html! {
                                <tr key={key}>
                                    <td>{ index + 1 }</td>
                                    <td>{ row.municipio_nome.clone() }</td>
                                    <td>{ row.uf.clone() }</td>
                                    <td>{ format_number(Some(row.total_pacientes as f64)) }</td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        </TableWrapper>
    }
}
