//! The `resumatch shell` command.
//!
//! Reads one command per line from stdin and applies it to a single
//! session that lives for the whole run.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use resumatch_core::extractor::SkillExtractor;
use resumatch_core::intake::collect_resumes;
use resumatch_core::placeholder::SeededIdentityGenerator;
use resumatch_core::report::AnalysisReport;
use resumatch_core::session::AnalysisSession;
use resumatch_core::AnalysisError;

use super::{
    load_setup, print_candidates, print_charts, print_summary, resolve_match_mode,
    resolve_requirements, split_list, write_reports, Setup,
};

const HELP: &str = "Commands:
  roles                     list job roles
  role <name>               select a role and load its default skills
  skills                    show the required skills
  require <a, b, ...>       replace the required skills
  add <a, b, ...>           add required skills
  remove <a, b, ...>        remove required skills
  analyze <paths...>        score resume files and add them to the session
  sample                    replace the session with the sample candidates
  show                      show the analyzed candidates
  charts                    show the score distribution and top skills
  export [dir] [format]     write reports (json, html, markdown, all)
  reset                     remove every candidate
  help                      show this help
  quit                      leave the shell";

enum Flow {
    Continue,
    Quit,
}

struct Shell {
    setup: Setup,
    extractor: SkillExtractor,
    identities: SeededIdentityGenerator,
    session: AnalysisSession,
}

pub fn execute(
    match_mode: Option<String>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let setup = load_setup(config_path.as_deref())?;
    let mode = resolve_match_mode(match_mode.as_deref(), &setup.config)?;
    let (role, required) =
        resolve_requirements(&setup.catalog, &setup.config.default_role, None, &[], &[])?;

    let mut shell = Shell {
        extractor: SkillExtractor::new(setup.catalog.vocabulary(), mode),
        identities: SeededIdentityGenerator::new(seed.unwrap_or(setup.config.seed)),
        session: AnalysisSession::new(role, required),
        setup,
    };

    println!("resumatch shell. Role: {}. Type 'help' for commands.", shell.session.role());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match shell.handle(line.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => match e.downcast_ref::<AnalysisError>() {
                Some(err) if err.is_warning() => println!("Warning: {err}"),
                _ => println!("Error: {e:#}"),
            },
        }
    }

    Ok(())
}

impl Shell {
    fn handle(&mut self, line: &str) -> Result<Flow> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "quit" | "exit" => return Ok(Flow::Quit),
            "roles" => {
                for name in self.setup.catalog.role_names() {
                    println!("  {name}");
                }
            }
            "role" => {
                let (role, required) =
                    resolve_requirements(&self.setup.catalog, rest, None, &[], &[])?;
                self.session.set_requirements(role, required);
                self.print_requirements();
            }
            "skills" => self.print_requirements(),
            "require" => {
                let required = self.setup.catalog.resolve_skills(&split_list(&[rest]))?;
                self.set_required(required);
            }
            "add" => {
                let mut required = self.session.required_skills().to_vec();
                for skill in self.setup.catalog.resolve_skills(&split_list(&[rest]))? {
                    if !required.contains(&skill) {
                        required.push(skill);
                    }
                }
                self.set_required(required);
            }
            "remove" => {
                let removed = self.setup.catalog.resolve_skills(&split_list(&[rest]))?;
                let mut required = self.session.required_skills().to_vec();
                required.retain(|s| !removed.contains(s));
                self.set_required(required);
            }
            "analyze" => {
                let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
                let files = collect_resumes(&paths)?;
                let added =
                    self.session
                        .append_batch(&files, &self.extractor, &mut self.identities)?;
                println!("Analyzed {added} resume(s), {} in session.", self.session.len());
            }
            "sample" => {
                self.session.load_sample_data();
                println!("Sample data loaded ({} candidates).", self.session.len());
            }
            "show" => {
                let report = self.report();
                print_candidates(&report);
                if !report.candidates.is_empty() {
                    print_summary(&report);
                }
            }
            "charts" => print_charts(&self.report().stats),
            "export" => {
                let mut args = rest.split_whitespace();
                let output = args
                    .next()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| self.setup.config.output_dir.clone());
                let format = args.next().unwrap_or("all");
                write_reports(&self.report(), &output, format)?;
            }
            "reset" => {
                self.session.clear();
                println!("Session cleared.");
            }
            other => println!("Unknown command: {other}. Type 'help' for commands."),
        }

        Ok(Flow::Continue)
    }

    fn set_required(&mut self, required: Vec<String>) {
        let role = self.session.role().to_string();
        self.session.set_requirements(role, required);
        self.print_requirements();
    }

    fn print_requirements(&self) {
        let required = self.session.required_skills();
        println!(
            "Role: {} | Required skills: {}",
            self.session.role(),
            if required.is_empty() {
                "(none)".to_string()
            } else {
                required.join(", ")
            }
        );
    }

    fn report(&self) -> AnalysisReport {
        AnalysisReport::from_session(
            &self.session,
            self.setup.config.histogram_bins,
            self.setup.config.top_skills,
        )
    }
}
