use log::debug;

use crate::config::*;

/// Renders the four reports of a score sheet, in the order
/// Big Five, RIASEC, Strengths, Motivations.
pub fn generate(sheet: &ScoreSheet) -> Vec<Report> {
    vec![
        big_five_report(sheet),
        riasec_report(sheet),
        strengths_report(sheet.strengths),
        motivations_report(sheet.motivations),
    ]
}

/// All the segments of the reports, in order.
pub fn flatten(reports: &[Report]) -> Vec<String> {
    reports
        .iter()
        .flat_map(|r| r.segments.iter().cloned())
        .collect()
}

/// The interest scores sorted by decreasing count.
///
/// The sort is stable: equal counts keep the canonical order R, I, A, S, E, C.
pub fn rank_interests(sheet: &ScoreSheet) -> Vec<(Riasec, u32)> {
    let mut res = sheet.ria.clone();
    res.sort_by(|x, y| y.1.cmp(&x.1));
    res
}

fn big_five_report(sheet: &ScoreSheet) -> Report {
    let segments = sheet
        .big
        .iter()
        .map(|(dim, count)| big_five_text(*dim, Band::from_count(*count), *count))
        .collect();
    Report {
        kind: ReportKind::BigFive,
        title: "Personality (Big Five)".to_string(),
        segments,
    }
}

fn big_five_text(dim: BigFive, band: Band, n: u32) -> String {
    match (dim, band) {
        (BigFive::E, Band::Low) => format!("Extraversion ({}): you recharge in quiet settings and prefer a few deep conversations to a crowded room.", n),
        (BigFive::E, Band::Mid) => format!("Extraversion ({}): you enjoy company and solitude alike, and adapt to the social energy around you.", n),
        (BigFive::E, Band::High) => format!("Extraversion ({}): you draw energy from people and are quick to speak up, meet others and take the stage.", n),
        (BigFive::A, Band::Low) => format!("Agreeableness ({}): you are direct and skeptical, and you defend your position even when it causes friction.", n),
        (BigFive::A, Band::Mid) => format!("Agreeableness ({}): you cooperate readily but know when to stand firm.", n),
        (BigFive::A, Band::High) => format!("Agreeableness ({}): you are warm and trusting, and you put harmony and the needs of others first.", n),
        (BigFive::C, Band::Low) => format!("Conscientiousness ({}): you prefer flexibility to plans and thrive when you can improvise.", n),
        (BigFive::C, Band::Mid) => format!("Conscientiousness ({}): you plan what matters and leave room for spontaneity elsewhere.", n),
        (BigFive::C, Band::High) => format!("Conscientiousness ({}): you are organized and dependable, and you follow through on what you start.", n),
        (BigFive::N, Band::Low) => format!("Neuroticism ({}): you stay calm under pressure and recover quickly from setbacks.", n),
        (BigFive::N, Band::Mid) => format!("Neuroticism ({}): you feel stress like most people and usually keep it under control.", n),
        (BigFive::N, Band::High) => format!("Neuroticism ({}): you feel emotions intensely, and pressure and uncertainty weigh on you.", n),
        (BigFive::O, Band::Low) => format!("Openness ({}): you value the familiar and the practical over novelty and abstraction.", n),
        (BigFive::O, Band::Mid) => format!("Openness ({}): you are curious about new ideas while keeping your feet on the ground.", n),
        (BigFive::O, Band::High) => format!("Openness ({}): you are imaginative and curious, and you seek out new ideas, art and experiences.", n),
    }
}

fn riasec_report(sheet: &ScoreSheet) -> Report {
    let ranked = rank_interests(sheet);
    debug!("riasec_report: ranked interests: {:?}", ranked);
    let mut segments: Vec<String> = Vec::new();
    if let [(top1, c1), (top2, c2), ..] = ranked.as_slice() {
        segments.push(format!(
            "Your strongest interest areas are {} ({}) with {} and {} ({}) with {}.",
            top1.name(),
            top1.letter(),
            c1,
            top2.name(),
            top2.letter(),
            c2
        ));
        segments.push(riasec_elaboration(*top1).to_string());
    }
    Report {
        kind: ReportKind::Riasec,
        title: "Career interests (RIASEC)".to_string(),
        segments,
    }
}

fn riasec_elaboration(top: Riasec) -> &'static str {
    match top {
        Riasec::R => "Realistic people like hands-on work with tools, machines or nature. Consider engineering trades, agriculture or technical maintenance.",
        Riasec::I => "Investigative people like to observe, analyze and solve problems. Consider research, medicine, data analysis or software.",
        Riasec::A => "Artistic people like to create and express themselves without rigid rules. Consider design, writing, music or the media.",
        Riasec::S => "Social people like to help, teach and care for others. Consider education, counseling, health care or social work.",
        Riasec::E => "Enterprising people like to lead, persuade and take risks. Consider management, sales, law or starting a business.",
        Riasec::C => "Conventional people like order, accuracy and well-defined procedures. Consider accounting, administration, logistics or finance.",
    }
}

fn strengths_report(counts: SplitCount) -> Report {
    let (a, b) = (counts.a, counts.b);
    let text = if a > b {
        format!("Your strengths lean analytical: you chose analytical strengths {} times and interpersonal strengths {} times. You shine when structuring problems, checking details and working through evidence.", a, b)
    } else if a < b {
        format!("Your strengths lean interpersonal: you chose interpersonal strengths {} times and analytical strengths {} times. You shine when connecting people, building trust and rallying a team.", b, a)
    } else {
        format!("Your strengths are balanced: you chose analytical strengths {} times and interpersonal strengths {} times. You can move between working on problems and working with people.", a, b)
    };
    Report {
        kind: ReportKind::Strengths,
        title: "Strengths".to_string(),
        segments: vec![text],
    }
}

fn motivations_report(counts: SplitCount) -> Report {
    let (a, b) = (counts.a, counts.b);
    let text = if a > b {
        format!("You are mostly driven by intrinsic motives: {} intrinsic choices against {} extrinsic ones. Interest, growth and autonomy matter more to you than rewards.", a, b)
    } else if a < b {
        format!("You are mostly driven by extrinsic motives: {} extrinsic choices against {} intrinsic ones. Recognition, security and rewards are strong levers for you.", b, a)
    } else {
        format!("Your motivation is balanced: {} intrinsic choices and {} extrinsic ones. You look for work that is both meaningful and rewarding.", a, b)
    };
    Report {
        kind: ReportKind::Motivations,
        title: "Motivations".to_string(),
        segments: vec![text],
    }
}
