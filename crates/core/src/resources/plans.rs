//! Plans and their add-ons

use recurly_domain::constants::{ADD_ONS, PLANS};
use recurly_domain::{Addressable, Plan, PlanAddOn, Resource, Result};

use crate::client::{Client, Pager};
use crate::http::{QueryParams, Transport};

impl<T: Transport> Client<T> {
    pub fn list_plans(&self, params: &QueryParams) -> Result<Pager<'_, Plan, T>> {
        self.list(PLANS.to_string(), None, params)
    }

    pub fn get_plan(&self, plan_code: &str) -> Result<Plan> {
        let code = self.require(Some(plan_code), "plan code")?;
        self.fetch(&Plan::item_path(code), &QueryParams::new())
    }

    pub fn create_plan(&self, plan: &mut Plan) -> Result<()> {
        self.ensure_new(plan)?;
        let payload = plan.write_payload();
        self.create(PLANS, &payload, plan)
    }

    pub fn update_plan(&self, plan: &mut Plan) -> Result<()> {
        let path = Plan::item_path(self.require(Some(plan.plan_code.as_str()), "plan code")?);
        let payload = plan.write_payload();
        self.update(&path, &payload, plan)
    }

    /// Delete the plan; existing subscriptions keep running.
    pub fn delete_plan(&self, plan_code: &str) -> Result<()> {
        let code = self.require(Some(plan_code), "plan code")?;
        self.delete(&Plan::item_path(code), &QueryParams::new())
    }

    /* ---------------------------------------------------------------------- */
    /* Add-ons                                                                */
    /* ---------------------------------------------------------------------- */

    pub fn list_plan_add_ons(&self, plan_code: &str, params: &QueryParams) -> Result<Pager<'_, PlanAddOn, T>> {
        let code = self.require(Some(plan_code), "plan code")?;
        self.list(format!("{PLANS}/{code}/{ADD_ONS}"), Some(code), params)
    }

    pub fn get_plan_add_on(&self, plan_code: &str, add_on_code: &str) -> Result<PlanAddOn> {
        let plan = self.require(Some(plan_code), "plan code")?;
        let add_on = self.require(Some(add_on_code), "add-on code")?;
        let mut record: PlanAddOn = self.fetch(&PlanAddOn::path(plan, add_on), &QueryParams::new())?;
        record.bind_parent(plan);
        Ok(record)
    }

    /// Create `add_on` under the plan named by its bound code or plan link.
    pub fn create_plan_add_on(&self, add_on: &mut PlanAddOn) -> Result<()> {
        self.ensure_new(add_on)?;
        let plan = self.require(add_on.owner_code(), "add-on plan code")?.to_string();
        let payload = add_on.write_payload();
        self.create(&format!("{PLANS}/{plan}/{ADD_ONS}"), &payload, add_on)?;
        add_on.bind_parent(&plan);
        Ok(())
    }

    pub fn update_plan_add_on(&self, add_on: &mut PlanAddOn) -> Result<()> {
        let plan = self.require(add_on.owner_code(), "add-on plan code")?.to_string();
        let path = PlanAddOn::path(&plan, self.require(Some(add_on.add_on_code.as_str()), "add-on code")?);
        let payload = add_on.write_payload();
        self.update(&path, &payload, add_on)?;
        add_on.bind_parent(&plan);
        Ok(())
    }

    pub fn delete_plan_add_on(&self, plan_code: &str, add_on_code: &str) -> Result<()> {
        let plan = self.require(Some(plan_code), "plan code")?;
        let add_on = self.require(Some(add_on_code), "add-on code")?;
        self.delete(&PlanAddOn::path(plan, add_on), &QueryParams::new())
    }
}
