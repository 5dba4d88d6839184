//! Interactive command loop
//!
//! A [`Session`] owns the record store for the lifetime of the process and
//! drives the main menu: show the menu, read a choice, run one operation to
//! completion, and come back. Rejected answers are reported and send the
//! user back to the menu; nothing is retried automatically.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Result;

use super::console::Console;
use super::input::{self, InputError};
use super::menu::MenuOption;
use super::output::Output;
use super::view;
use crate::domain::{Crop, Dimensions, PlantingRecord};
use crate::storage::{Config, CsvExporter, RecordStore};

/// One run of the interactive program
pub struct Session<R, W> {
    console: Console<R, W>,
    output: Output,
    config: Config,
    store: RecordStore,
    exporter: CsvExporter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty store
    pub fn new(console: Console<R, W>, config: Config, output: Output) -> Self {
        let exporter = CsvExporter::new(config.export_path.clone());
        Self {
            console,
            output,
            config,
            store: RecordStore::new(),
            exporter,
        }
    }

    /// Returns the records entered so far
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consumes the session, returning its console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the menu loop until the user picks exit
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let answer = self.console.prompt("\nEscolha uma opção: ")?;

            let flow = match answer.parse::<MenuOption>() {
                Ok(option) => {
                    self.output
                        .verbose_ctx("menu", &format!("Selected {:?}", option));
                    self.dispatch(option)?
                }
                Err(e) => {
                    self.output
                        .verbose_ctx("menu", &format!("Rejected menu answer {:?}", answer));
                    self.reject(e)?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                self.output.verbose("Session finished");
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<ControlFlow<()>> {
        match option {
            MenuOption::Create => self.create()?,
            MenuOption::List => self.list()?,
            MenuOption::Update => self.update()?,
            MenuOption::Delete => self.delete()?,
            MenuOption::Export => self.export()?,
            MenuOption::Exit => {
                self.exit()?;
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.println("")?;
        self.console.rule('=')?;
        self.console
            .println("        FARMTECH SOLUTIONS - AGRICULTURA DIGITAL")?;
        self.console.rule('=')?;
        self.console.println("")?;
        for line in view::farm(&self.config.farm) {
            self.console.println(line)?;
        }
        self.console.println("\nMENU PRINCIPAL:")?;
        for option in MenuOption::ALL {
            self.console
                .println(format!("{}. {}", option.key(), option.label()))?;
        }
        self.console.rule('=')
    }

    /// Waits for ENTER, if configured to
    fn pause(&mut self) -> Result<()> {
        if self.config.pause_after_operation {
            self.console.prompt("\nPressione ENTER para continuar...")?;
        }
        Ok(())
    }

    /// Reports a rejected answer and ends the current operation
    fn reject(&mut self, error: InputError) -> Result<()> {
        self.console.println(format!("\n{}", error))?;
        self.pause()
    }

    /// Reports that there is nothing to operate on
    fn report_empty(&mut self) -> Result<()> {
        self.console.println("\nNenhum registro encontrado!")?;
        self.pause()
    }

    /// Resolves a typed identifier to a stored record
    fn lookup(&self, answer: &str) -> Result<&PlantingRecord, InputError> {
        let id = input::parse_id(answer)?;
        self.store.get(id).ok_or(InputError::RecordNotFound(id))
    }

    fn show_choices(&mut self) -> Result<()> {
        self.console.println("\nRegistros disponíveis:")?;
        for record in self.store.iter() {
            self.console.println(view::choice(record))?;
        }
        Ok(())
    }

    fn create(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.heading("ENTRADA DE DADOS")?;

        self.console.println("\nCulturas disponíveis:")?;
        for (index, crop) in Crop::ALL.iter().enumerate() {
            self.console
                .println(format!("{}. {} ({})", index + 1, crop, crop.geometry()))?;
        }

        let answer = self.console.prompt("\nSelecione a cultura (número): ")?;
        let crop = match input::parse_crop(&answer) {
            Ok(crop) => crop,
            Err(e) => return self.reject(e),
        };

        let kind = crop.geometry();
        self.console
            .println(format!("\nÁrea de plantio ({} = {}):", kind, kind.formula()))?;

        let mut values = Vec::with_capacity(kind.fields().len());
        for field in kind.fields() {
            let answer = self.console.prompt(format!("{} (m): ", field))?;
            match input::parse_number(&answer) {
                Ok(value) => values.push(value),
                Err(e) => {
                    self.output
                        .verbose_ctx("create", &format!("Aborted on {} = {:?}", field, answer));
                    return self.reject(e);
                }
            }
        }

        let dimensions = Dimensions::from_values(kind, &values)?;
        let record = self.store.create(crop, dimensions)?;
        self.output.verbose_ctx(
            "create",
            &format!("Stored record {} ({} m²)", record.id(), record.area_m2()),
        );
        let summary = view::summary(record);

        self.console.println("")?;
        self.console.rule('-')?;
        for line in summary {
            self.console.println(line)?;
        }
        self.console.rule('-')?;
        self.pause()
    }

    fn list(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.heading("VISUALIZAÇÃO DE DADOS")?;

        if self.store.is_empty() {
            return self.report_empty();
        }

        self.console
            .println(format!("\nTotal de registros: {}", self.store.len()))?;

        for record in self.store.iter() {
            self.console.println("")?;
            self.console.rule('-')?;
            for line in view::details(record) {
                self.console.println(line)?;
            }
            self.console.rule('-')?;
        }

        self.pause()
    }

    fn update(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.heading("ATUALIZAÇÃO DE DADOS")?;

        if self.store.is_empty() {
            return self.report_empty();
        }

        self.show_choices()?;
        let answer = self
            .console
            .prompt("\nDigite o ID do registro a atualizar: ")?;
        let record = match self.lookup(&answer).cloned() {
            Ok(record) => record,
            Err(e) => return self.reject(e),
        };

        self.console.println("\nDados atuais:")?;
        self.console.println(format!("Cultura: {}", record.crop()))?;
        self.console
            .println(view::dimension_values(record.dimensions()))?;

        self.console
            .println("\nDigite os novos valores (deixe em branco para manter o valor atual):")?;

        let mut dimensions = *record.dimensions();
        for (field, current) in record.dimensions().fields() {
            let answer = self
                .console
                .prompt(format!("{} (atual: {}m): ", field, current))?;
            if answer.trim().is_empty() {
                continue;
            }

            match input::parse_number(&answer) {
                Ok(value) => dimensions = dimensions.with(field, value)?,
                Err(_) => {
                    self.console
                        .println("\nValor inválido! Mantendo o valor atual.")?;
                }
            }
        }

        let updated = self.store.update(record.id(), dimensions)?;
        self.output.verbose_ctx(
            "update",
            &format!("Recomputed record {} ({} m²)", updated.id(), updated.area_m2()),
        );
        let new_area = format!(
            "Nova área: {:.2} m² ({:.4} ha)",
            updated.area_m2(),
            updated.area_ha()
        );

        self.console.println("")?;
        self.console.rule('-')?;
        self.console.println("Registro atualizado com sucesso!")?;
        self.console.println(new_area)?;
        self.console.rule('-')?;
        self.pause()
    }

    fn delete(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.heading("DELEÇÃO DE DADOS")?;

        if self.store.is_empty() {
            return self.report_empty();
        }

        self.show_choices()?;
        let answer = self
            .console
            .prompt("\nDigite o ID do registro a deletar: ")?;
        let id = match self.lookup(&answer) {
            Ok(record) => record.id(),
            Err(e) => return self.reject(e),
        };

        let confirm = self
            .console
            .prompt(format!("\nConfirma a deleção do registro #{}? (S/N): ", id))?;

        if input::is_confirmation(&confirm) {
            self.store.remove(id)?;
            self.output
                .verbose_ctx("delete", &format!("Removed record {}", id));
            self.console.println("\nRegistro deletado com sucesso!")?;
        } else {
            self.console.println("\nOperação cancelada.")?;
        }

        self.pause()
    }

    fn export(&mut self) -> Result<()> {
        if self.store.is_empty() {
            self.console.println("\nNenhum registro para exportar!")?;
            return self.pause();
        }

        let path = self.exporter.path().display().to_string();
        match self.exporter.export(self.store.iter()) {
            Ok(rows) => {
                self.output
                    .verbose_ctx("export", &format!("Wrote {} row(s) to {}", rows, path));
                self.console
                    .println(format!("\nDados exportados com sucesso para '{}'!", path))?;
            }
            Err(e) => {
                self.output.verbose_ctx("export", &format!("{:?}", e));
                self.console
                    .println(format!("\nErro ao exportar dados: {:#}", e))?;
            }
        }

        self.pause()
    }

    fn exit(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console
            .println("\nObrigado por usar o sistema FarmTech Solutions!")?;
        self.console.println("Saindo do programa...\n")
    }
}
