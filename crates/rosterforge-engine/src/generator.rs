//! The generation run: snapshot construction and day-by-day orchestration.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::NaiveDate;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use rosterforge_config::GenerationConfig;
use rosterforge_core::calendar::{is_weekend, month_days};
use rosterforge_core::{
    ExperienceLevel, Nurse, NurseId, RequestStatus, Result, ScheduleEntry, ShiftRequest, ShiftType,
    VacationRequest, Ward,
};

use crate::feasibility::{assess, DenialReason, WorkRules};
use crate::priority::{shift_priority, ShiftQuota};
use crate::state::{MonthlyTally, NurseRunState};

/// Nurses picked for one shift on one date. Ward teams are small; the
/// inline capacity covers every realistic minimum-staff setting.
type Team = SmallVec<[NurseId; 8]>;

/// A single generation run over an in-memory snapshot of one ward's roster.
///
/// The run is synchronous and free of I/O: construction indexes the inputs,
/// [`generate`](ScheduleGenerator::generate) walks the month date by date
/// and returns the complete entry list. All run state is owned by this
/// value; two concurrent runs can never interfere.
///
/// Processing order is part of the observable contract: dates strictly
/// ascending, and within a date VACATION lock, then DAY, EVENING, NIGHT
/// selection (each consuming the pool left by the previous stage), then OFF
/// for everyone unassigned. Earlier picks are irrevocable; there is no
/// backtracking and no error when a shift cannot be filled.
pub struct ScheduleGenerator {
    ward: Ward,
    /// Active nurses in input order; this order is the determinism anchor
    /// for every pool walk and tie-break.
    nurses: Vec<Nurse>,
    by_id: HashMap<NurseId, usize>,
    config: GenerationConfig,
    rules: WorkRules,
    /// Pending/approved wishes, keyed nurse -> date. Last-indexed wins when
    /// the store holds duplicates for one (nurse, date).
    requests: HashMap<NurseId, HashMap<NaiveDate, ShiftType>>,
    /// Dates covered by approved vacations, per nurse.
    vacation_dates: HashMap<NurseId, HashSet<NaiveDate>>,
    states: HashMap<NurseId, NurseRunState>,
}

impl ScheduleGenerator {
    /// Builds a run from a consistent snapshot of roster-store records.
    ///
    /// Inactive nurses are dropped; rejected requests are ignored; only
    /// approved vacation ranges are expanded into per-date locks.
    pub fn new(
        ward: Ward,
        nurses: Vec<Nurse>,
        config: GenerationConfig,
        shift_requests: Vec<ShiftRequest>,
        vacation_requests: Vec<VacationRequest>,
    ) -> Self {
        let nurses: Vec<Nurse> = nurses.into_iter().filter(|n| n.is_active).collect();
        let by_id = nurses
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        let mut requests: HashMap<NurseId, HashMap<NaiveDate, ShiftType>> = HashMap::new();
        for request in shift_requests {
            if matches!(
                request.status,
                RequestStatus::Pending | RequestStatus::Approved
            ) {
                requests
                    .entry(request.nurse_id)
                    .or_default()
                    .insert(request.date, request.requested_shift);
            }
        }

        let mut vacation_dates: HashMap<NurseId, HashSet<NaiveDate>> = HashMap::new();
        for vacation in &vacation_requests {
            if vacation.status == RequestStatus::Approved {
                vacation_dates
                    .entry(vacation.nurse_id.clone())
                    .or_default()
                    .extend(vacation.days());
            }
        }

        let rules = WorkRules::from_config(&config);

        Self {
            ward,
            nurses,
            by_id,
            config,
            rules,
            requests,
            vacation_dates,
            states: HashMap::new(),
        }
    }

    /// Runs the month and returns one entry per active nurse per date.
    ///
    /// # Errors
    ///
    /// Fails only when the config's month is outside `1..=12`; every
    /// scheduling shortfall (understaffed shift, unmixed team) is a silent
    /// outcome, never an error.
    pub fn generate(&mut self) -> Result<Vec<ScheduleEntry>> {
        let started = Instant::now();
        self.init_states();

        let days = month_days(self.config.year, self.config.month)?;
        let quota = ShiftQuota::for_month(days.len());

        info!(
            event = "generation_start",
            ward = %self.ward.id,
            year = self.config.year,
            month = self.config.month,
            nurses = self.nurses.len(),
            days = days.len(),
        );

        let mut entries = Vec::with_capacity(days.len() * self.nurses.len());
        for date in days {
            self.run_day(date, &quota, &mut entries);
        }

        info!(
            event = "generation_end",
            ward = %self.ward.id,
            entries = entries.len(),
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(entries)
    }

    /// The per-nurse tallies as accumulated by the last run.
    ///
    /// Vacation and annual-leave days are folded into `off` here; the
    /// stored-entry view in [`crate::stats::monthly_stats`] reports a
    /// separate vacation bucket.
    pub fn run_tallies(&self) -> HashMap<NurseId, MonthlyTally> {
        self.states
            .iter()
            .map(|(id, state)| (id.clone(), state.tally.clone()))
            .collect()
    }

    fn init_states(&mut self) {
        self.states = self
            .nurses
            .iter()
            .map(|n| (n.id.clone(), NurseRunState::default()))
            .collect();
    }

    /// One date: VACATION_LOCK -> ASSIGN_DAY -> ASSIGN_EVENING ->
    /// ASSIGN_NIGHT -> ASSIGN_OFF, committing all entries at the end.
    fn run_day(&mut self, date: NaiveDate, quota: &ShiftQuota, entries: &mut Vec<ScheduleEntry>) {
        let weekend = is_weekend(date);

        let available: Vec<NurseId> = self
            .nurses
            .iter()
            .filter(|n| !self.on_vacation(&n.id, date))
            .map(|n| n.id.clone())
            .collect();

        // VACATION_LOCK: locked entries preempt selection; the state update
        // resets the nurse's consecutive counters.
        let vacationers: Vec<NurseId> = self
            .nurses
            .iter()
            .filter(|n| self.on_vacation(&n.id, date))
            .map(|n| n.id.clone())
            .collect();
        for nurse_id in &vacationers {
            entries.push(ScheduleEntry::new(
                self.ward.id.clone(),
                nurse_id.clone(),
                date,
                ShiftType::Vacation,
                true,
            ));
            self.record(nurse_id, ShiftType::Vacation, weekend);
        }

        // Selection stages run before any emission-time state update, so
        // same-day picks never see each other's tallies.
        let day_team = self.staff_shift(
            date,
            ShiftType::Day,
            self.ward.min_staff_day,
            &available,
            weekend,
            quota,
        );

        let after_day: Vec<NurseId> = available
            .iter()
            .filter(|id| !day_team.contains(id))
            .cloned()
            .collect();
        let evening_team = self.staff_shift(
            date,
            ShiftType::Evening,
            self.ward.min_staff_evening,
            &after_day,
            weekend,
            quota,
        );

        let after_evening: Vec<NurseId> = after_day
            .iter()
            .filter(|id| !evening_team.contains(id))
            .cloned()
            .collect();
        let night_team = self.staff_shift(
            date,
            ShiftType::Night,
            self.ward.min_staff_night,
            &after_evening,
            weekend,
            quota,
        );

        let off_nurses: Vec<NurseId> = after_evening
            .iter()
            .filter(|id| !night_team.contains(id))
            .cloned()
            .collect();

        // ASSIGN_DAY emission honors a SPLIT wish: a nurse staffed into the
        // day team whose request for this date asked for SPLIT is recorded
        // as SPLIT.
        for nurse_id in &day_team {
            let shift = if self.requested_shift(nurse_id, date) == Some(ShiftType::Split) {
                ShiftType::Split
            } else {
                ShiftType::Day
            };
            entries.push(ScheduleEntry::new(
                self.ward.id.clone(),
                nurse_id.clone(),
                date,
                shift,
                false,
            ));
            self.record(nurse_id, shift, weekend);
        }

        for nurse_id in &evening_team {
            entries.push(ScheduleEntry::new(
                self.ward.id.clone(),
                nurse_id.clone(),
                date,
                ShiftType::Evening,
                false,
            ));
            self.record(nurse_id, ShiftType::Evening, weekend);
        }

        for nurse_id in &night_team {
            entries.push(ScheduleEntry::new(
                self.ward.id.clone(),
                nurse_id.clone(),
                date,
                ShiftType::Night,
                false,
            ));
            self.record(nurse_id, ShiftType::Night, weekend);
        }

        for nurse_id in &off_nurses {
            entries.push(ScheduleEntry::new(
                self.ward.id.clone(),
                nurse_id.clone(),
                date,
                ShiftType::Off,
                false,
            ));
            self.record(nurse_id, ShiftType::Off, weekend);
        }

        debug!(
            event = "day_committed",
            date = %date,
            vacation = vacationers.len(),
            day = day_team.len(),
            evening = evening_team.len(),
            night = night_team.len(),
            off = off_nurses.len(),
        );
    }

    /// Selects and mix-corrects one shift's team.
    fn staff_shift(
        &self,
        date: NaiveDate,
        shift: ShiftType,
        required: usize,
        pool: &[NurseId],
        weekend: bool,
        quota: &ShiftQuota,
    ) -> Team {
        let team = self.select_for_shift(date, shift, required, pool, weekend, quota);
        let team = self.ensure_mixed_experience(team, shift, date, pool);
        if team.len() < required {
            debug!(
                event = "understaffed",
                date = %date,
                shift = %shift,
                required,
                staffed = team.len(),
            );
        }
        team
    }

    /// Picks up to `required` nurses for `shift` on `date` from `pool`.
    ///
    /// Preference requests are honored first, in pool order. Remaining
    /// slots are filled from the non-requesting candidates ranked by
    /// weekend balance (when enabled, on weekends) then by priority score;
    /// the sort is stable, so ties keep pool order. Every pick passes a
    /// feasibility check; running out of candidates under-fills silently.
    fn select_for_shift(
        &self,
        date: NaiveDate,
        shift: ShiftType,
        required: usize,
        pool: &[NurseId],
        weekend: bool,
        quota: &ShiftQuota,
    ) -> Team {
        let mut selected = Team::new();

        let requesters: Vec<usize> = (0..pool.len())
            .filter(|&i| self.requested_shift(&pool[i], date) == Some(shift))
            .collect();

        for &i in &requesters {
            if selected.len() >= required {
                break;
            }
            match self.can_assign(&pool[i], shift, date) {
                Ok(()) => selected.push(pool[i].clone()),
                Err(reason) => {
                    trace!(event = "candidate_rejected", nurse = %pool[i], %shift, %reason)
                }
            }
        }

        if selected.len() < required {
            struct Candidate<'a> {
                nurse_id: &'a NurseId,
                priority: i32,
                weekend_work: u32,
            }

            // Requesters stay out of the ranked pass even when they failed
            // the feasibility check above.
            let mut ranked: Vec<Candidate> = pool
                .iter()
                .enumerate()
                .filter(|(i, _)| requesters.binary_search(i).is_err())
                .map(|(_, id)| {
                    let tally = &self.states[id].tally;
                    Candidate {
                        nurse_id: id,
                        priority: shift_priority(tally, quota, shift),
                        weekend_work: tally.weekend_work,
                    }
                })
                .collect();

            ranked.sort_by(|a, b| {
                if self.config.balance_weekends && weekend && a.weekend_work != b.weekend_work {
                    return a.weekend_work.cmp(&b.weekend_work);
                }
                b.priority.cmp(&a.priority)
            });

            for Candidate { nurse_id, .. } in ranked {
                if selected.len() >= required {
                    break;
                }
                match self.can_assign(nurse_id, shift, date) {
                    Ok(()) => selected.push(nurse_id.clone()),
                    Err(reason) => {
                        trace!(event = "candidate_rejected", nurse = %nurse_id, %shift, %reason)
                    }
                }
            }
        }

        selected
    }

    /// Ensures a multi-person team carries a senior-or-above member.
    ///
    /// When the requirement is on and a team of two or more has no senior,
    /// the first feasible senior remaining in the pool replaces the first
    /// non-senior member, keeping the slot position. With no such senior
    /// the team is left unmixed.
    fn ensure_mixed_experience(
        &self,
        mut selected: Team,
        shift: ShiftType,
        date: NaiveDate,
        pool: &[NurseId],
    ) -> Team {
        if !self.config.require_mixed_experience || selected.len() < 2 {
            return selected;
        }

        if selected
            .iter()
            .any(|id| self.experience(id).is_senior_or_above())
        {
            return selected;
        }

        let replacement = pool
            .iter()
            .filter(|id| !selected.contains(id))
            .filter(|id| self.experience(id).is_senior_or_above())
            .find(|id| self.can_assign(id, shift, date).is_ok());

        if let Some(senior) = replacement {
            if let Some(pos) = selected
                .iter()
                .position(|id| !self.experience(id).is_senior_or_above())
            {
                debug!(
                    event = "mix_swap",
                    date = %date,
                    %shift,
                    out = %selected[pos],
                    senior = %senior,
                );
                selected[pos] = senior.clone();
            }
        }

        selected
    }

    /// Whether `nurse_id` may take `shift` on `date` given the current run
    /// state. Pure with respect to run state.
    fn can_assign(
        &self,
        nurse_id: &NurseId,
        shift: ShiftType,
        date: NaiveDate,
    ) -> std::result::Result<(), DenialReason> {
        if self.on_vacation(nurse_id, date) {
            return Err(DenialReason::OnVacation);
        }
        assess(&self.states[nurse_id], shift, &self.rules)
    }

    fn on_vacation(&self, nurse_id: &NurseId, date: NaiveDate) -> bool {
        self.vacation_dates
            .get(nurse_id)
            .is_some_and(|days| days.contains(&date))
    }

    fn requested_shift(&self, nurse_id: &NurseId, date: NaiveDate) -> Option<ShiftType> {
        self.requests
            .get(nurse_id)
            .and_then(|by_date| by_date.get(&date))
            .copied()
    }

    fn experience(&self, nurse_id: &NurseId) -> ExperienceLevel {
        self.nurses[self.by_id[nurse_id]].experience_level
    }

    fn record(&mut self, nurse_id: &NurseId, shift: ShiftType, weekend: bool) {
        if let Some(state) = self.states.get_mut(nurse_id) {
            state.record(shift, weekend);
        }
    }
}
