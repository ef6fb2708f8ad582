//! tg skill - manage locally defined skills.

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_machine;
use crate::core::skill::SkillRecord;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SkillArgs {
    #[command(subcommand)]
    pub command: SkillCommand,
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// Define a new skill locally
    Add(SkillAddArgs),
    /// List known skills
    List(SkillListArgs),
}

#[derive(Args, Debug)]
pub struct SkillAddArgs {
    /// Employee the skill belongs to
    #[arg(long)]
    pub employee: String,

    /// Expertise label (e.g. "Go")
    #[arg(long)]
    pub expertise: String,

    /// Experience description (e.g. "2 years")
    #[arg(long)]
    pub experience: String,
}

#[derive(Args, Debug)]
pub struct SkillListArgs {
    /// Only skills belonging to this employee
    #[arg(long)]
    pub employee: Option<String>,

    /// Case-insensitive expertise substring filter
    #[arg(long)]
    pub filter: Option<String>,
}

pub fn run(ctx: &AppContext, args: &SkillArgs) -> Result<()> {
    match &args.command {
        SkillCommand::Add(add) => run_add(ctx, add),
        SkillCommand::List(list) => run_list(ctx, list),
    }
}

fn run_add(ctx: &AppContext, args: &SkillAddArgs) -> Result<()> {
    let mut registry = ctx.load_registry()?;

    let skill = SkillRecord::new(&args.employee, &args.expertise, &args.experience);
    let id = skill.id.clone();
    // A duplicate (employee, expertise, experience) aborts here and leaves
    // the saved registry untouched.
    registry.insert(skill)?;
    ctx.save_registry(&registry)?;

    if ctx.machine_mode() {
        return emit_machine(serde_json::json!({
            "added": id,
            "total": registry.len(),
        }));
    }

    if ctx.output.use_colors() {
        println!(
            "{} {} ({}) for employee {}",
            "Added".green().bold(),
            args.expertise,
            args.experience,
            args.employee
        );
    } else {
        println!(
            "Added {} ({}) for employee {}",
            args.expertise, args.experience, args.employee
        );
    }
    Ok(())
}

fn run_list(ctx: &AppContext, args: &SkillListArgs) -> Result<()> {
    let registry = ctx.load_registry()?;

    let mut skills: Vec<&SkillRecord> = match (&args.employee, &args.filter) {
        (Some(employee), _) => registry.by_employee(employee),
        (None, Some(filter)) => registry.filter_expertise(filter),
        (None, None) => registry.all().iter().collect(),
    };
    if let (Some(_), Some(filter)) = (&args.employee, &args.filter) {
        let needle = filter.to_lowercase();
        skills.retain(|s| s.expertise.to_lowercase().contains(&needle));
    }

    if ctx.machine_mode() {
        return emit_machine(serde_json::json!({ "skills": skills }));
    }

    if skills.is_empty() {
        println!("No skills found");
        println!();
        println!("Define one with: tg skill add --employee <id> --expertise <s> --experience <s>");
        return Ok(());
    }

    println!(
        "{:38} {:10} {:20} {:16}",
        "ID".bold(),
        "EMPLOYEE".bold(),
        "EXPERTISE".bold(),
        "EXPERIENCE".bold()
    );
    println!("{}", "-".repeat(88).dimmed());
    for skill in skills {
        println!(
            "{:38} {:10} {:20} {:16}",
            skill.id, skill.employee_id, skill.expertise, skill.experience
        );
    }
    Ok(())
}
