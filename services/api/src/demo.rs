use crate::infra::{
    build_session, load_catalog, parse_experience_level, parse_job_type, parse_sort_key,
};
use chrono::Utc;
use clap::Args;
use job_board::error::AppError;
use job_board::listings::{
    format_salary, skill_preview, time_ago, BoardView, ExperienceLevel, FilterCriteria, Job,
    JobCounts, JobType, SortKey,
};
use job_board::session::{JobDraft, Role};
use std::path::PathBuf;

const SKILL_PREVIEW_LIMIT: usize = 3;

#[derive(Args, Debug, Default)]
pub(crate) struct JobListArgs {
    /// Job feed (JSON file). Defaults to the built-in listings.
    #[arg(long)]
    pub(crate) feed: Option<PathBuf>,
    /// Keep only these job types (repeatable, e.g. "Full Time")
    #[arg(long = "job-type", value_parser = parse_job_type)]
    pub(crate) job_types: Vec<JobType>,
    /// Keep only jobs whose location contains one of these fragments (repeatable)
    #[arg(long = "location")]
    pub(crate) locations: Vec<String>,
    /// Keep only these experience levels (repeatable, e.g. "Senior Level")
    #[arg(long = "level", value_parser = parse_experience_level)]
    pub(crate) experience_levels: Vec<ExperienceLevel>,
    /// Case-insensitive search over title, company, and skills
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Ordering: date, salary, or title
    #[arg(long, value_parser = parse_sort_key, default_value = "date")]
    pub(crate) sort: SortKey,
    /// Print the per-option counts after the listing
    #[arg(long)]
    pub(crate) counts: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Job feed (JSON file). Defaults to the built-in listings.
    #[arg(long)]
    pub(crate) feed: Option<PathBuf>,
    /// Stop after the recruiter posting step.
    #[arg(long)]
    pub(crate) skip_application: bool,
}

pub(crate) fn run_job_listing(args: JobListArgs) -> Result<(), AppError> {
    let JobListArgs {
        feed,
        job_types,
        locations,
        experience_levels,
        query,
        sort,
        counts,
    } = args;

    let catalog = load_catalog(feed.as_deref())?;
    let criteria = FilterCriteria {
        job_types,
        locations,
        experience_levels,
        search_query: query,
    };
    let view = BoardView::build(catalog.jobs(), &criteria, sort);

    println!(
        "{} of {} jobs (sorted by {})",
        view.total,
        catalog.len(),
        sort.label()
    );
    render_jobs(&view.jobs);
    if counts {
        render_counts(&view.counts);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        feed,
        skip_application,
    } = args;

    let session = build_session(load_catalog(feed.as_deref())?);
    println!("Job board demo");
    println!("Catalog holds {} jobs", session.all_jobs()?.len());

    let recruiter = session.sign_in("recruiter@example.com", Role::Recruiter)?;
    println!(
        "\nSigned in as {} ({}) | can manage postings: {}",
        recruiter.name,
        recruiter.role,
        session.capabilities().can_manage
    );
    let posted = match session.add_job(demo_draft()) {
        Ok(job) => job,
        Err(err) => {
            println!("  Posting rejected: {err}");
            return Ok(());
        }
    };
    println!("- Posted {} as {}", posted.title, posted.id);
    println!("  Managed postings: {}", session.managed_jobs()?.len());

    let remote_only = FilterCriteria {
        job_types: vec![JobType::Remote],
        ..FilterCriteria::default()
    };
    let remote = session.view(&remote_only, SortKey::Salary)?;
    println!("\nRemote jobs by salary ({}):", remote.total);
    render_jobs(&remote.jobs);

    if skip_application {
        return Ok(());
    }

    let seeker = session.sign_in("jordan@example.com", Role::Jobseeker)?;
    println!(
        "\nSigned in as {} ({}) | can apply: {}",
        seeker.name,
        seeker.role,
        session.capabilities().can_apply
    );
    for attempt in 1..=2 {
        match session.apply(&posted.id) {
            Ok(application) => println!(
                "- Attempt {attempt}: applied to {} -> application {} ({})",
                posted.id,
                application.id,
                application.status.label()
            ),
            Err(err) => println!("- Attempt {attempt}: application refused ({err})"),
        }
    }

    println!("\nApplied jobs:");
    for applied in session.applied_jobs()? {
        println!(
            "  - {} at {} (applied {})",
            applied.job.title,
            applied.job.company,
            time_ago(&applied.application.applied_date, Utc::now())
        );
    }

    render_counts(&session.view(&FilterCriteria::default(), SortKey::Date)?.counts);
    if let Some(user) = session.sign_out() {
        println!("\nSigned out {}", user.email);
    }
    Ok(())
}

fn demo_draft() -> JobDraft {
    JobDraft {
        title: "Platform Engineer".to_string(),
        company: "Northwind Logistics".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::Remote,
        experience_level: ExperienceLevel::SeniorLevel,
        salary_min: 140_000,
        salary_max: 185_000,
        description: "Own the deployment pipeline and the services behind it.".to_string(),
        requirements: "5+ years operating production services\nComfort with Kubernetes"
            .to_string(),
        benefits: "Remote stipend\nHealth insurance".to_string(),
        skills: "Rust, Kubernetes, Terraform, PostgreSQL".to_string(),
        apply_url: None,
    }
}

fn render_jobs(jobs: &[Job]) {
    let now = Utc::now();
    for job in jobs {
        println!(
            "- {} | {} | {} | {} | {}",
            job.title,
            job.company,
            job.location,
            job.job_type,
            format_salary(&job.salary)
        );

        let (shown, hidden) = skill_preview(&job.skills, SKILL_PREVIEW_LIMIT);
        let mut skills = shown.join(", ");
        if hidden > 0 {
            skills.push_str(&format!(" +{hidden} more"));
        }
        println!(
            "  {} | posted {} | skills: {}",
            job.experience_level,
            time_ago(&job.posted_date, now),
            skills
        );
    }
}

fn render_counts(counts: &JobCounts) {
    println!("\nJob types:");
    for (job_type, count) in &counts.job_type_counts {
        println!("  {job_type}: {count}");
    }
    println!("Experience levels:");
    for (level, count) in &counts.experience_level_counts {
        println!("  {level}: {count}");
    }
    println!("Locations:");
    for (city, count) in &counts.location_counts {
        println!("  {city}: {count}");
    }
}
