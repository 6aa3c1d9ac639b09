//! Sample records used when no backend export is configured.

use super::leaves::LeaveRecord;
use super::records::{
    AvailabilityEntry, Candidate, CandidateStage, EmploymentStatus, PayrollEntry, PayrollStatus,
    Policy, PolicyStatus, Presence, TeamMember,
};
use chrono::NaiveDate;

struct MemberSeed {
    name: &'static str,
    role: &'static str,
    dept: &'static str,
    status: EmploymentStatus,
    join_date: &'static str,
    location: &'static str,
    teamlead: &'static str,
    performance: u8,
    projects: u32,
    tasks_completed: u32,
}

const MEMBERS: [MemberSeed; 5] = [
    MemberSeed {
        name: "Alice Johnson",
        role: "Senior Dev",
        dept: "Engineering",
        status: EmploymentStatus::Active,
        join_date: "Jan 12, 2023",
        location: "San Francisco, CA",
        teamlead: "Mike Ross",
        performance: 92,
        projects: 5,
        tasks_completed: 127,
    },
    MemberSeed {
        name: "Bob Smith",
        role: "Product Owner",
        dept: "Product",
        status: EmploymentStatus::Active,
        join_date: "Mar 05, 2022",
        location: "New York, NY",
        teamlead: "Jessica Pearson",
        performance: 88,
        projects: 3,
        tasks_completed: 94,
    },
    MemberSeed {
        name: "Charlie Brown",
        role: "Designer",
        dept: "Design",
        status: EmploymentStatus::OnLeave,
        join_date: "Jun 15, 2023",
        location: "Austin, TX",
        teamlead: "Diana Prince",
        performance: 95,
        projects: 4,
        tasks_completed: 78,
    },
    MemberSeed {
        name: "Diana Prince",
        role: "Marketing Lead",
        dept: "Marketing",
        status: EmploymentStatus::Active,
        join_date: "Aug 22, 2021",
        location: "Los Angeles, CA",
        teamlead: "Harvey Specter",
        performance: 90,
        projects: 6,
        tasks_completed: 156,
    },
    MemberSeed {
        name: "Evan Wright",
        role: "Sales Rep",
        dept: "Sales",
        status: EmploymentStatus::Active,
        join_date: "Nov 01, 2023",
        location: "Chicago, IL",
        teamlead: "Harvey Specter",
        performance: 85,
        projects: 2,
        tasks_completed: 63,
    },
];

fn email_for(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or(name);
    format!("{}@company.com", first.to_lowercase())
}

pub fn team_members() -> Vec<TeamMember> {
    MEMBERS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| TeamMember {
            id,
            name: seed.name.to_string(),
            email: email_for(seed.name),
            role: seed.role.to_string(),
            dept: seed.dept.to_string(),
            status: seed.status,
            join_date: seed.join_date.to_string(),
            location: seed.location.to_string(),
            teamlead: seed.teamlead.to_string(),
            performance: format!("{}%", seed.performance),
            projects: seed.projects,
            tasks_completed: seed.tasks_completed,
        })
        .collect()
}

pub fn availability() -> Vec<AvailabilityEntry> {
    [
        ("Alice Johnson", "Engineering", Presence::Online, "Reviewing PR #102", "Now"),
        ("Bob Smith", "Product", Presence::Away, "Lunch Break", "15 mins ago"),
        ("Charlie Brown", "Design", Presence::Offline, "-", "2 hours ago"),
        ("Diana Prince", "Marketing", Presence::Online, "Campaign Planning", "Now"),
        ("Evan Wright", "Sales", Presence::Online, "Client Call", "Now"),
    ]
    .into_iter()
    .map(|(name, dept, availability, task, last_active)| AvailabilityEntry {
        name: name.to_string(),
        dept: dept.to_string(),
        availability,
        task: task.to_string(),
        last_active: last_active.to_string(),
    })
    .collect()
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            role: "Frontend Engineer".to_string(),
            stage: CandidateStage::Interview,
            score: 85,
            source: "LinkedIn".to_string(),
            applied_date: "Nov 15, 2025".to_string(),
            location: "Seattle, WA".to_string(),
            skills: vec!["React".into(), "TypeScript".into(), "Node.js".into()],
        },
        Candidate {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            role: "Product Teamlead".to_string(),
            stage: CandidateStage::Screening,
            score: 92,
            source: "Referral".to_string(),
            applied_date: "Nov 20, 2025".to_string(),
            location: "San Francisco, CA".to_string(),
            skills: vec!["Product Strategy".into(), "Agile".into(), "Analytics".into()],
        },
        Candidate {
            id: 3,
            name: "Mike Ross".to_string(),
            email: "mike.ross@email.com".to_string(),
            role: "Legal Advisor".to_string(),
            stage: CandidateStage::Offer,
            score: 78,
            source: "Indeed".to_string(),
            applied_date: "Nov 10, 2025".to_string(),
            location: "New York, NY".to_string(),
            skills: vec!["Contract Law".into(), "Compliance".into(), "Negotiation".into()],
        },
    ]
}

pub fn leave_records() -> Vec<LeaveRecord> {
    let day = |month: u32, day: u32| NaiveDate::from_ymd_opt(2025, month, day);
    [
        (1, "Diana Prince", day(12, 1), day(12, 2), "Sick Leave: fever", "approved"),
        (2, "Bob Smith", day(12, 10), day(12, 10), "Casual Leave: errands", "pending"),
        (3, "Evan Wright", day(12, 20), day(12, 25), "Vacation: family trip", "rejected"),
    ]
    .into_iter()
    .filter_map(|(id, name, from, to, reason, status)| {
        Some(LeaveRecord {
            id,
            employee_name: name.to_string(),
            from_date: from?,
            to_date: to?,
            reason: Some(reason.to_string()),
            status: Some(status.to_string()),
        })
    })
    .collect()
}

pub fn payroll() -> Vec<PayrollEntry> {
    [
        ("Alice Johnson", "$5,400"),
        ("Bob Smith", "$4,800"),
        ("Charlie Brown", "$5,100"),
    ]
    .into_iter()
    .map(|(name, salary)| PayrollEntry {
        name: name.to_string(),
        month: "November 2025".to_string(),
        salary: salary.to_string(),
        status: PayrollStatus::Paid,
    })
    .collect()
}

pub fn policies() -> Vec<Policy> {
    [
        ("Leave Policy", "HR", "Jan 01, 2025"),
        ("Work From Home Policy", "HR", "Jan 01, 2025"),
        ("Code of Conduct", "Compliance", "Jan 01, 2025"),
        ("Data Security Policy", "IT", "Feb 15, 2025"),
        ("Expense Reimbursement", "Finance", "Jan 01, 2025"),
        ("Performance Review Policy", "HR", "Jan 01, 2025"),
    ]
    .into_iter()
    .map(|(name, category, effective_date)| Policy {
        name: name.to_string(),
        category: category.to_string(),
        effective_date: effective_date.to_string(),
        status: PolicyStatus::Active,
    })
    .collect()
}
