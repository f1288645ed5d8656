mod config;
mod util;

use color_print::cprintln;
use config::Config;
use minic::{lower_text, Error};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use util::{diag::Diag, display};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

const DEFAULT_SOURCE: &str = "
int main(){
  int a = 5;
  int b = 3;
  if (a > b) { print(a - b); } else { print(b - a); }
  int i = 0;
  while (i < 3) { print(i); i = i + 1; }
}
";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file. Read from stdin when omitted
    input: Option<String>,

    /// Lower a saved TAC file instead of compiling source
    #[clap(long, value_name = "FILE", conflicts_with = "input")]
    from_tac: Option<String>,

    /// Output directory [default: out]
    #[clap(short, long)]
    out_dir: Option<String>,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Also write the symbol table as YAML
    #[clap(long)]
    yaml: bool,

    /// Do not echo the phases
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    if let Err(diag) = run(&args) {
        diag.report();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Diag> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(dir) = &args.out_dir {
        config.out_dir = dir.clone();
    }
    config.echo &= !args.quiet;
    config.yaml |= args.yaml;

    if let Some(path) = &args.from_tac {
        return run_tac(path, &config);
    }

    let (file, src) = read_source(args.input.as_deref())?;
    if config.echo {
        display::print_source(&src);
    }

    let out =
        minic::compile(&file, &src).map_err(|err| Diag::from(err).with_source(&file, &src))?;
    if config.echo {
        display::print_summary(&out.summary);
        display::print_program(&out.program);
        display::print_symbols(&out.symbols);
        display::print_tac(&out.tac);
        display::print_asm(&out.asm);
    }

    let names = &config.artifacts;
    let mut saved = vec![
        save(&config.out_dir, &names.tokens, out.summary.lines())?,
        save(&config.out_dir, &names.symtab, out.symbols.dump())?,
        save(&config.out_dir, &names.tac, out.tac.iter().map(ToString::to_string))?,
        save(&config.out_dir, &names.asm, out.asm.iter().map(ToString::to_string))?,
    ];
    if config.yaml {
        let yaml = out.symbols.to_yaml()?;
        saved.push(save(&config.out_dir, &names.symtab_yaml, yaml.lines())?);
    }
    if config.echo {
        display::print_saved(&saved);
    }
    Ok(())
}

fn run_tac(path: &str, config: &Config) -> Result<(), Diag> {
    let text = fs::read_to_string(path).map_err(Error::from)?;
    let asm = lower_text(&text);
    if config.echo {
        display::print_asm(&asm);
    }

    let unhandled = asm.iter().filter(|inst| inst.is_unhandled()).count();
    if unhandled > 0 {
        cprintln!("<yellow,bold>warn</>: {} line(s) of {} were not TAC", unhandled, path);
    }

    let saved = save(
        &config.out_dir,
        &config.artifacts.asm,
        asm.iter().map(ToString::to_string),
    )?;
    if config.echo {
        display::print_saved(&[saved]);
    }
    Ok(())
}

/// File name and text of the program to compile.
///
/// Without a file the program is typed on stdin and ends at the first empty
/// line; an immediately empty entry selects the built-in sample.
fn read_source(input: Option<&str>) -> Result<(String, String), Error> {
    if let Some(path) = input {
        return Ok((path.to_string(), fs::read_to_string(path)?));
    }

    println!(
        "Enter your program (finish with an empty line, or press Enter immediately for default):"
    );
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        Ok(("<default>".to_string(), DEFAULT_SOURCE.to_string()))
    } else {
        Ok(("<stdin>".to_string(), lines.join("\n")))
    }
}

fn save<I, S>(dir: &str, name: &str, lines: I) -> Result<String, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fs::create_dir_all(dir)?;
    let path = Path::new(dir).join(name);
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    fs::write(&path, text)?;
    Ok(path.display().to_string())
}
