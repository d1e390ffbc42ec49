//! Duty status enum shared by the simulator and the log bucketizer.

/// The four lines of a driver's daily log grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DutyStatus {
    /// Relieved of all work.  Used for 30-minute breaks and 34-hour restarts.
    OffDuty,
    /// Rest in the sleeper berth.  Used for 10-hour shift resets.
    Sleeper,
    /// Behind the wheel.
    Driving,
    /// Working but not driving: loading, unloading, fueling.
    OnDuty,
}

impl DutyStatus {
    /// Grid order, top line first.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// `true` for time that counts toward on-duty totals.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }

    /// Wire label, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF_DUTY",
            DutyStatus::Sleeper => "SLEEPER",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDuty  => "ON_DUTY",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
