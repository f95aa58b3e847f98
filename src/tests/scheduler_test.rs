#[cfg(test)]
pub mod test {
    use crate::{
        buffer::buffer_cache::AccessType,
        scheduler::{
            policy::{Policy, Scheduler},
            request::Request,
        },
        storage::disk::disk_model::{Direction, Track},
    };

    fn scheduler_with(policy: Policy, tracks: &[Track]) -> Scheduler {
        let mut scheduler = Scheduler::new(policy);
        for &track in tracks {
            scheduler.add_request(track.into());
        }
        scheduler
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut scheduler = scheduler_with(Policy::Fifo, &[5, 2, 9]);

        assert_eq!(Some(5), scheduler.schedule_fifo().map(|r| r.track));
        assert_eq!(Some(2), scheduler.schedule_fifo().map(|r| r.track));
        assert_eq!(Some(9), scheduler.schedule_fifo().map(|r| r.track));

        // Empty queue is not an error, there is simply nothing to do
        assert_eq!(None, scheduler.schedule_fifo());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn look_sweeps_right_then_left() {
        let mut scheduler = scheduler_with(Policy::Look, &[10, 70, 30, 90]);

        let sweep = scheduler.schedule_look(50, Direction::Right);

        assert_eq!(vec![70, 90, 30, 10], sweep.tracks());
        // 50 -> 70 -> 90 -> 30 -> 10
        assert_eq!(20 + 20 + 60 + 20, sweep.seek_count);
        assert_eq!(0, scheduler.pending_len());
    }

    #[test]
    fn look_sweeps_left_then_right() {
        let mut scheduler = scheduler_with(Policy::Look, &[10, 70, 30, 90]);

        let sweep = scheduler.schedule_look(50, Direction::Left);

        assert_eq!(vec![30, 10, 70, 90], sweep.tracks());
        assert_eq!(20 + 20 + 60 + 20, sweep.seek_count);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn look_drops_requests_under_the_head() {
        let mut scheduler = scheduler_with(Policy::Look, &[50, 60, 50, 40]);

        let sweep = scheduler.schedule_look(50, Direction::Right);

        assert_eq!(vec![60, 40], sweep.tracks());
        assert!(!scheduler.has_pending());

        // Nothing pending gives an empty sweep
        let sweep = scheduler.schedule_look(50, Direction::Right);
        assert!(sweep.sequence.is_empty());
        assert_eq!(0, sweep.seek_count);
    }

    #[test]
    fn look_keeps_duplicates_in_arrival_order() {
        let mut scheduler = Scheduler::new(Policy::Look);
        scheduler.add_request(Request::write(80));
        scheduler.add_request(Request::read(20));
        scheduler.add_request(Request::read(80));

        let sweep = scheduler.schedule_look(50, Direction::Right);

        assert_eq!(
            vec![Request::write(80), Request::read(80), Request::read(20)],
            sweep.sequence
        );
    }

    #[test]
    fn flook_scans_up_then_wraps() {
        let mut scheduler = scheduler_with(Policy::Flook, &[10, 70, 30]);

        assert_eq!(Some(70), scheduler.schedule_flook(50).map(|r| r.track));
        assert_eq!(vec![10, 30], scheduler.pending_tracks());

        // Nothing left at or above the head: wrap to the lowest pending track
        assert_eq!(Some(10), scheduler.schedule_flook(70).map(|r| r.track));
        assert_eq!(Some(30), scheduler.schedule_flook(10).map(|r| r.track));
        assert_eq!(None, scheduler.schedule_flook(30));
    }

    #[test]
    fn flook_services_head_track_before_wrapping() {
        let mut scheduler = scheduler_with(Policy::Flook, &[10, 60, 50]);

        assert_eq!(Some(50), scheduler.schedule_flook(50).map(|r| r.track));
        // Remainder is inward then outward, each ascending
        assert_eq!(vec![60, 10], scheduler.pending_tracks());
    }

    #[test]
    fn flook_is_stable_on_equal_tracks() {
        let mut scheduler = Scheduler::new(Policy::Flook);
        scheduler.add_request(Request::write(30));
        scheduler.add_request(Request::read(30));

        let first = scheduler.schedule_flook(0).unwrap();
        assert_eq!(AccessType::Write, first.access);
        let second = scheduler.schedule_flook(30).unwrap();
        assert_eq!(AccessType::Read, second.access);
    }

    #[test]
    fn next_batch_per_policy() {
        let mut fifo = scheduler_with(Policy::Fifo, &[9, 3]);
        assert_eq!(vec![Request::read(9)], fifo.next_batch(0, Direction::Right));

        let mut flook = scheduler_with(Policy::Flook, &[9, 3]);
        assert_eq!(vec![Request::read(9)], flook.next_batch(5, Direction::Right));

        // LOOK serves what is under the head first, then one full sweep
        let mut look = scheduler_with(Policy::Look, &[9, 5, 3]);
        let batch: Vec<Track> = look
            .next_batch(5, Direction::Right)
            .iter()
            .map(|r| r.track)
            .collect();
        assert_eq!(vec![5, 9, 3], batch);
        assert!(look.next_batch(3, Direction::Right).is_empty());
    }

    #[test]
    fn policy_names() {
        assert_eq!(Policy::Fifo, "FIFO".parse::<Policy>().unwrap());
        assert_eq!(Policy::Look, "look".parse::<Policy>().unwrap());
        assert_eq!(Policy::Flook, "FLook".parse::<Policy>().unwrap());
        assert_eq!("FLOOK", Policy::Flook.to_string());

        let err = Scheduler::from_name("SSTF").err().unwrap();
        assert!(err.to_string().contains("Unknown scheduling algorithm"));
    }
}
